/// Category substrings that mark a dead-ball restart.
pub const DEFAULT_RESTART_PATTERNS: &[&str] =
    &["ThrowIn", "FreeKick", "GoalKick", "CornerKick", "Penalty"];

pub const GOAL_CATEGORY: &str = "ShotAtGoal_SuccessfulShot";
pub const KICKOFF_PATTERN: &str = "KickOff";
pub const VAR_CATEGORY: &str = "VideoAssistantAction";

pub const DECISION_TIMESTAMP: &str = "DecisionTimestamp";
pub const VAR_START_TIMESTAMP: &str = "TimestampStartAction";
pub const VAR_END_TIMESTAMP: &str = "TimestampEndAction";

pub const EVENT_FILE_EXTENSION: &str = "json";
