pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod pagination;
    }
    pub mod inbound {
        pub mod api_error;
        pub mod caller;
        pub mod graphql_error;
    }
}

pub mod modules {
    pub mod catalog {
        pub mod core {
            pub mod model;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod seed;
                pub mod stores;
                pub mod stores_in_memory;
            }
        }
    }
    pub mod time_entries {
        pub mod core {
            pub mod decide;
            pub mod filter;
            pub mod state;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod start_time_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod stop_time_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod create_time_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod update_time_entry {
                pub mod command;
                pub mod handler;
            }
            pub mod delete_time_entry {
                pub mod handler;
            }
            pub mod list_time_entries_by_user {
                pub mod handler;
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod time_entry_store;
                pub mod time_entry_store_in_memory;
            }
        }
    }
    pub mod reports {
        pub mod core {
            pub mod aggregate;
            pub mod hierarchy;
            pub mod period;
            pub mod rate;
            pub mod report;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod generate_report {
                pub mod command;
                pub mod handler;
            }
            pub mod list_available_months {
                pub mod handler;
            }
            pub mod read_reports {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod report_store;
                pub mod report_store_in_memory;
            }
        }
    }
}

pub mod shell;
