pub mod audit;
pub mod calendar;
pub mod confirmation;
pub mod export;
pub mod header;
pub mod icons;
pub mod layout;
pub mod login;
pub mod notice;
pub mod password;
pub mod persons;
pub mod plan_modals;
pub mod sidebar;
pub mod stats;
pub mod users;
