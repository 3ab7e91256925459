pub mod account;
pub mod conversation;
pub mod routing_rule;
pub mod session;
pub mod stage;
pub mod team_member;
