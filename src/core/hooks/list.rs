use crate::api::models::PaginatedResponse;
use crate::error::ApiError;
use futures::future::BoxFuture;

/// `(page, limit)` async producer of one page of items.
pub type PageFn<T> =
    Box<dyn Fn(u32, u32) -> BoxFuture<'static, Result<PaginatedResponse<T>, ApiError>> + Send + Sync>;

/// Paginated list hook.
///
/// Accumulates pages into `data` in fetch order. The current page counter is
/// internal; callers drive it through [`Self::load_more`] and
/// [`Self::refetch`].
pub struct ListHook<T> {
    producer: PageFn<T>,
    limit: u32,
    page: u32,
    data: Vec<T>,
    loading: bool,
    error: Option<String>,
    has_more: bool,
}

impl<T> ListHook<T> {
    pub fn new(producer: PageFn<T>, limit: u32) -> Self {
        Self {
            producer,
            limit,
            page: 1,
            data: Vec::new(),
            loading: false,
            error: None,
            has_more: true,
        }
    }

    /// Initial fetch: page 1, replacing whatever is present.
    pub async fn mount(&mut self) {
        self.fetch_page(1, false).await;
    }

    /// Fetch one page. `append` concatenates the new items after the existing
    /// ones (each page's internal order preserved); otherwise the page
    /// replaces `data` outright.
    pub async fn fetch_page(&mut self, page: u32, append: bool) {
        self.loading = true;
        self.error = None;

        match (self.producer)(page, self.limit).await {
            Ok(envelope) => {
                if envelope.success {
                    if append {
                        self.data.extend(envelope.data);
                    } else {
                        self.data = envelope.data;
                    }
                    self.has_more = envelope.pagination.has_next;
                    self.page = page;
                } else {
                    self.error = Some(
                        envelope
                            .message
                            .unwrap_or_else(|| "Unknown error occurred".to_string()),
                    );
                }
            }
            Err(err) => {
                self.error = Some(err.message());
            }
        }

        self.loading = false;
    }

    /// Fetch the next page and append it. No-op while a fetch is in flight or
    /// once the last page has been reached.
    pub async fn load_more(&mut self) {
        if !self.has_more || self.loading {
            return;
        }
        self.fetch_page(self.page + 1, true).await;
    }

    /// Reset to page 1 and replace the accumulated items.
    pub async fn refetch(&mut self) {
        self.page = 1;
        self.fetch_page(1, false).await;
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }
}
