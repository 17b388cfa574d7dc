use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbGroup, DbGroupSummary, DbPerson, DbSchedule, DbShift, DbUser};

// Mock repositories for testing

mock! {
    pub ScheduleRepo {
        pub async fn create_schedule(
            &self,
            name: &'static str,
            start_day: NaiveDate,
            end_date: NaiveDate,
        ) -> eyre::Result<DbSchedule>;

        pub async fn get_schedule_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSchedule>>;

        pub async fn schedule_exists(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;

        pub async fn list_schedules(&self) -> eyre::Result<Vec<DbSchedule>>;

        pub async fn update_schedule(
            &self,
            id: Uuid,
            name: Option<&'static str>,
            start_day: Option<NaiveDate>,
            end_date: Option<NaiveDate>,
        ) -> eyre::Result<DbSchedule>;

        pub async fn delete_schedule(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub ShiftRepo {
        pub async fn create_shift(
            &self,
            schedule_id: Uuid,
            name: &'static str,
            capacity: i32,
            shift_type: &'static str,
        ) -> eyre::Result<DbShift>;

        pub async fn get_shifts_by_schedule_id(
            &self,
            schedule_id: Uuid,
        ) -> eyre::Result<Vec<DbShift>>;

        pub async fn delete_shift(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            username: &'static str,
            password_hash: &'static str,
            is_superuser: bool,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn get_user_by_username(
            &self,
            username: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn user_has_permission(
            &self,
            user_id: Uuid,
            permission: &'static str,
        ) -> eyre::Result<bool>;

        pub async fn delete_user(&self, id: Uuid) -> eyre::Result<()>;
    }
}

mock! {
    pub PersonRepo {
        pub async fn create_person(
            &self,
            name: &'static str,
            title: &'static str,
            user_id: Option<Uuid>,
        ) -> eyre::Result<DbPerson>;

        pub async fn list_persons(&self) -> eyre::Result<Vec<DbPerson>>;
    }
}

mock! {
    pub GroupRepo {
        pub async fn create_group(
            &self,
            name: &'static str,
        ) -> eyre::Result<DbGroup>;

        pub async fn list_groups(&self) -> eyre::Result<Vec<DbGroupSummary>>;
    }
}
