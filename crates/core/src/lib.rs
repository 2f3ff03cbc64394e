//! Net playing time for soccer match halves, computed from event streams.
//!
//! The engine classifies stoppages (restarts, goals, VAR reviews), measures
//! each one, and subtracts their sum from the half's duration. Everything
//! under `stoppage` and `report` is pure; I/O lives in `events::infrastructure`.

pub mod shared {
    pub mod clock;
    pub mod constants;
    pub mod event;
    pub mod half_events;
    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod stoppage {
    pub mod domain {
        pub mod goal_stoppage_calculator;
        pub mod qualifier_extractor;
        pub mod restart_stoppage_calculator;
        pub mod stoppage_calculator;
        pub mod stoppage_classifier;
        pub mod stoppage_interval;
        pub mod var_stoppage_calculator;
    }
}

pub mod report {
    pub mod domain {
        pub mod duration_distribution;
        pub mod half_report;
        pub mod npt_aggregator;
    }
}

pub mod events {
    pub mod domain {
        pub mod event_provider;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod batch_npt_use_case;
    pub mod compute_npt_use_case;
    pub mod npt_config;
    pub mod pipeline_logger;
}
