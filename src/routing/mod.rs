pub mod router;

pub use router::{
    resolve_option, GoalResolution, GoalRouter, GoalRoutingResult, Resolution, ResolvedOption,
    RoutingConfig, DEFAULT_PROFILE, PROFILE_PRIORITY, STYLE_PROFILES,
};
