use crate::api::models::ApiResponse;
use crate::error::ApiError;
use futures::future::BoxFuture;
use serde_json::Value;

/// Zero-argument async producer of a response envelope.
pub type FetchFn<T> =
    Box<dyn Fn() -> BoxFuture<'static, Result<ApiResponse<T>, ApiError>> + Send + Sync>;

/// Single-entity fetch hook.
///
/// Tracks `data` / `loading` / `error` for one envelope producer. A soft
/// failure (`success: false`) leaves `data` untouched and sets `error`; a
/// raised [`ApiError`] surfaces as its message. The dependency set mirrors
/// the values whose change must trigger a re-fetch — see [`Self::sync_deps`].
pub struct FetchHook<T> {
    producer: FetchFn<T>,
    deps: Vec<Value>,
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> FetchHook<T> {
    pub fn new(producer: FetchFn<T>, deps: Vec<Value>) -> Self {
        Self {
            producer,
            deps,
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Initial fetch, invoked once when the owning unit comes up.
    pub async fn mount(&mut self) {
        self.refetch().await;
    }

    pub async fn refetch(&mut self) {
        self.loading = true;
        self.error = None;

        match (self.producer)().await {
            Ok(envelope) => {
                if envelope.success {
                    self.data = envelope.data;
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

    /// Re-fetch when the dependency values differ from the last observed set.
    pub async fn sync_deps(&mut self, deps: Vec<Value>) {
        if deps != self.deps {
            self.deps = deps;
            self.refetch().await;
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_producer(
        calls: Arc<AtomicUsize>,
        envelope: fn() -> Result<ApiResponse<String>, ApiError>,
    ) -> FetchFn<String> {
        Box::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { envelope() })
        })
    }

    fn ok_envelope() -> Result<ApiResponse<String>, ApiError> {
        Ok(ApiResponse {
            data: Some("hello".to_string()),
            success: true,
            message: None,
            errors: vec![],
        })
    }

    #[tokio::test]
    async fn test_mount_stores_data() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut hook = FetchHook::new(counting_producer(calls.clone(), ok_envelope), vec![]);

        assert!(hook.data().is_none());
        hook.mount().await;

        assert_eq!(hook.data(), Some(&"hello".to_string()));
        assert!(!hook.loading());
        assert!(hook.error().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_soft_failure_keeps_data_and_sets_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut hook = FetchHook::new(counting_producer(calls.clone(), ok_envelope), vec![]);
        hook.mount().await;

        hook.producer = Box::new(|| {
            Box::pin(async {
                Ok(ApiResponse {
                    data: None,
                    success: false,
                    message: Some("Profile is private".to_string()),
                    errors: vec![],
                })
            })
        });
        hook.refetch().await;

        // Prior data survives a soft failure
        assert_eq!(hook.data(), Some(&"hello".to_string()));
        assert_eq!(hook.error(), Some("Profile is private"));
        assert!(!hook.loading());
    }

    #[tokio::test]
    async fn test_soft_failure_without_message_uses_fallback() {
        let mut hook: FetchHook<String> = FetchHook::new(
            Box::new(|| {
                Box::pin(async {
                    Ok(ApiResponse {
                        data: None,
                        success: false,
                        message: None,
                        errors: vec![],
                    })
                })
            }),
            vec![],
        );
        hook.refetch().await;

        assert_eq!(hook.error(), Some("Unknown error occurred"));
    }

    #[tokio::test]
    async fn test_raised_error_surfaces_its_message() {
        let mut hook: FetchHook<String> = FetchHook::new(
            Box::new(|| {
                Box::pin(async {
                    Err(ApiError::Http {
                        status: 503,
                        message: "Service unavailable".to_string(),
                        errors: vec![],
                    })
                })
            }),
            vec![],
        );
        hook.refetch().await;

        assert!(hook.data().is_none());
        assert_eq!(hook.error(), Some("Service unavailable"));
        assert!(!hook.loading());
    }

    #[tokio::test]
    async fn test_refetch_clears_previous_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut hook: FetchHook<String> = FetchHook::new(
            Box::new(|| {
                Box::pin(async {
                    Err(ApiError::Network {
                        message: "connection refused".to_string(),
                    })
                })
            }),
            vec![],
        );
        hook.refetch().await;
        assert!(hook.error().is_some());

        hook.producer = counting_producer(calls, ok_envelope);
        hook.refetch().await;
        assert!(hook.error().is_none());
        assert_eq!(hook.data(), Some(&"hello".to_string()));
    }

    #[tokio::test]
    async fn test_sync_deps_refetches_only_on_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut hook = FetchHook::new(
            counting_producer(calls.clone(), ok_envelope),
            vec![json!("user-1")],
        );
        hook.mount().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Unchanged deps: no fetch
        hook.sync_deps(vec![json!("user-1")]).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Changed deps: one fetch
        hook.sync_deps(vec![json!("user-2")]).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
