pub mod replay_api;
pub mod models {
    pub mod driver;
    pub mod team;
    pub mod session;
    pub mod track;
    pub mod glossary;

    pub mod general;
}

pub mod helpers {
    pub mod slug;
    pub mod logging;

    pub mod handelbars {
        pub mod format_date;
        pub mod format_circuit;
        pub mod to_json;
    }
}
