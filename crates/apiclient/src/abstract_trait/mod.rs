pub mod account;
pub mod conversation;
pub mod routing_rule;
pub mod session;
pub mod stage;
pub mod team_member;
pub mod transport;

pub use self::account::{AccountClientTrait, DynAccountClient};
pub use self::conversation::{ConversationClientTrait, DynConversationClient};
pub use self::routing_rule::{DynRoutingRuleClient, RoutingRuleClientTrait};
pub use self::session::{DynSessionStorage, SessionStorageTrait};
pub use self::stage::{DynStageClient, StageClientTrait};
pub use self::team_member::{DynTeamMemberClient, TeamMemberClientTrait};
pub use self::transport::{DynHttpTransport, HttpTransportTrait, RawResponse};
