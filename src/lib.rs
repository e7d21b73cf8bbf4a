pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
        pub mod notifier;
    }
}

pub mod modules {
    pub mod cart {
        pub mod cart_manager;
        pub mod core {
            pub mod cart;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod product;
            pub mod stock;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod add_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod remove_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_product_amount {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_cart {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod cart_store;
                pub mod stock_service;
                pub mod stock_service_http;
                pub mod stock_service_in_memory;
            }
        }
    }
}

pub mod shell;
