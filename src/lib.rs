pub mod shared {
    pub mod http {
        pub mod error_response;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod errors;
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod user_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod binding;
                pub mod http;
            }
            pub mod outbound {
                pub mod user_repository_in_memory;
            }
        }
    }
}

pub mod shell;
