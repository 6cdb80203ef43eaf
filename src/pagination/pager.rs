//! Cursor pager over a list endpoint

use super::types::{Direction, PaginationState};
use crate::error::Result;
use crate::form;
use crate::http::{call_as, Backend};
use crate::params::{ListParamsExt, RequestOptions};
use crate::types::{Identified, List, Method};
use futures::stream::{self, Stream};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Walks a list endpoint page by page
///
/// `T` is the item type, `P` the list parameter set. The parameters are
/// re-encoded for every page with the cursor moved forward (or backward).
pub struct ListPager<T, P> {
    backend: Arc<dyn Backend>,
    path: String,
    params: P,
    options: RequestOptions,
    state: PaginationState,
    _item: PhantomData<fn() -> T>,
}

impl<T, P> ListPager<T, P>
where
    T: DeserializeOwned + Identified,
    P: Serialize + ListParamsExt,
{
    /// Create a pager starting from the given parameters
    pub fn new(
        backend: Arc<dyn Backend>,
        path: impl Into<String>,
        params: P,
        options: RequestOptions,
    ) -> Self {
        let state = PaginationState::new(Direction::from_params(params.list()));
        Self {
            backend,
            path: path.into(),
            params,
            options,
            state,
            _item: PhantomData,
        }
    }

    /// Current pagination state
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Fetch the next page, or `None` once the list is exhausted
    pub async fn next_page(&mut self) -> Result<Option<List<T>>> {
        if self.state.done {
            return Ok(None);
        }

        let values = form::encode(&self.params)?;
        let page: List<T> = call_as(
            self.backend.as_ref(),
            Method::GET,
            &self.path,
            values,
            &self.options,
        )
        .await?;

        self.state.add_page(page.len());
        debug!(
            path = %self.path,
            page = self.state.pages,
            items = page.len(),
            has_more = page.has_more,
            "Fetched list page"
        );
        self.advance(&page);
        Ok(Some(page))
    }

    fn advance(&mut self, page: &List<T>) {
        let edge = match self.state.direction {
            Direction::Forward => page.data.last(),
            Direction::Backward => page.data.first(),
        };

        let Some(item) = edge.filter(|_| page.has_more) else {
            self.state.mark_done();
            return;
        };

        let cursor = item.id().to_string();
        let list = self.params.list_mut();
        match self.state.direction {
            Direction::Forward => list.starting_after = Some(cursor.clone()),
            Direction::Backward => list.ending_before = Some(cursor.clone()),
        }
        self.state.set_cursor(cursor);
    }

    /// Fetch pages until the list ends or `limit` items were collected
    pub async fn collect_all(mut self, limit: Option<usize>) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.data);
            if let Some(limit) = limit {
                if items.len() >= limit {
                    items.truncate(limit);
                    break;
                }
            }
        }
        Ok(items)
    }

    /// Stream items one at a time, fetching pages as needed
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::try_unfold(
            (self, VecDeque::new()),
            |(mut pager, mut buffer)| async move {
                loop {
                    if let Some(item) = buffer.pop_front() {
                        return Ok(Some((item, (pager, buffer))));
                    }
                    match pager.next_page().await? {
                        Some(page) => buffer.extend(page.data),
                        None => return Ok(None),
                    }
                }
            },
        )
    }
}

impl<T, P: std::fmt::Debug> std::fmt::Debug for ListPager<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListPager")
            .field("path", &self.path)
            .field("params", &self.params)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
