use aetheric_shared_contracts::time::TimeService;
use chrono::{DateTime, Utc};

aetheric_di::build! {
    #[derive(Debug, Clone, Copy)]
    pub struct TimeServiceImpl;
}

impl TimeService for TimeServiceImpl {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
