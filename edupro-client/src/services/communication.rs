//! School calendar events and notices

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::ListQuery;
use shared::models::{Event, Notice, NoticeUpdate};

use crate::http::HttpClient;
use crate::resource::Resource;
use crate::ClientResult;

pub const EVENTS_PATH: &str = "/communication/events/";
pub const NOTICES_PATH: &str = "/communication/notices/";

#[async_trait]
pub trait CommunicationApi: HttpClient + Sized {
    fn events(&self) -> Resource<'_, Self, Event> {
        Resource::new(self, EVENTS_PATH)
    }

    fn notices(&self) -> Resource<'_, Self, Notice> {
        Resource::new(self, NOTICES_PATH)
    }

    /// Events starting on or after `from`, earliest first
    async fn upcoming_events(&self, from: NaiveDate) -> ClientResult<Vec<Event>> {
        let query = ListQuery::new()
            .ordering("start_date")
            .filter("start_date__gte", from);
        self.events().all(&query).await
    }

    async fn publish_notice(&self, notice_id: i64) -> ClientResult<Notice> {
        let update = NoticeUpdate {
            is_published: Some(true),
            ..Default::default()
        };
        self.notices().update(notice_id, &update).await
    }
}

impl<C: HttpClient> CommunicationApi for C {}
