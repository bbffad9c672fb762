//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change state; query handlers only read.

pub mod handlers;

pub use handlers::chat::{
    ListMessagesHandler, ListMessagesQuery, PostMessageCommand, PostMessageHandler,
};
pub use handlers::collaboration::{
    GetRequestHandler, GetRequestQuery, ListRequestsHandler, ListRequestsQuery,
    RespondToRequestCommand, RespondToRequestHandler, RespondToRequestResult,
    SubmitRequestCommand, SubmitRequestHandler,
};
pub use handlers::project::{
    AddMemberCommand, AddMemberHandler, CreateProjectCommand, CreateProjectHandler,
    DeleteProjectCommand, DeleteProjectHandler, GetProjectHandler, GetProjectQuery,
    ListProjectsHandler, ListProjectsQuery,
};
pub use handlers::recommendation::{
    GetRecommendationsHandler, GetRecommendationsQuery, RecommendationLimits,
};
pub use handlers::user::{
    CreateUserCommand, CreateUserHandler, GetUserHandler, GetUserQuery, UpdateUserCommand,
    UpdateUserHandler,
};
