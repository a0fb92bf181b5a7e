// Crate entry point. Only declares and exposes modules, no business logic here.

pub mod modules {
    pub mod rosters {
        pub mod core {
            pub mod evolve;
            pub mod registration;
            pub mod roster;
            pub mod state;
        }
        pub mod use_cases {
            pub mod build_roster {
                pub mod projection;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod json;
            }
        }
    }
}

pub mod shell;

pub use modules::rosters::core::registration::Registration;
pub use modules::rosters::core::roster::Roster;
pub use modules::rosters::use_cases::build_roster::projection::build_roster;
