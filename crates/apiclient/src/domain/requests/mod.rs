pub mod account;
pub mod api;
pub mod conversation;
pub mod routing_rule;
pub mod stage;
pub mod team_member;
