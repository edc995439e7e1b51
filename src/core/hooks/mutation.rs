use crate::api::models::ApiResponse;
use crate::error::ApiError;
use futures::future::BoxFuture;

/// One-argument async mutation producer.
pub type MutationFn<T, V> =
    Box<dyn Fn(V) -> BoxFuture<'static, Result<ApiResponse<T>, ApiError>> + Send + Sync>;

pub type SuccessCallback<T> = Box<dyn Fn(&T) + Send + Sync>;
pub type ErrorCallback = Box<dyn Fn(&ApiError) + Send + Sync>;
pub type SettledCallback = Box<dyn Fn() + Send + Sync>;

/// Optional observers for a mutation's outcome. `on_settled` runs after every
/// attempt, success or failure.
pub struct MutationCallbacks<T> {
    pub on_success: Option<SuccessCallback<T>>,
    pub on_error: Option<ErrorCallback>,
    pub on_settled: Option<SettledCallback>,
}

impl<T> Default for MutationCallbacks<T> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_error: None,
            on_settled: None,
        }
    }
}

/// Mutation hook: fire-and-observe writes.
///
/// `data` holds the result of the last successful mutation. Failures — soft
/// (`success: false`) or raised — set `error` and invoke `on_error`; nothing
/// is ever propagated to the caller.
pub struct MutationHook<T, V> {
    mutation: MutationFn<T, V>,
    callbacks: MutationCallbacks<T>,
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T, V> MutationHook<T, V> {
    pub fn new(mutation: MutationFn<T, V>) -> Self {
        Self::with_callbacks(mutation, MutationCallbacks::default())
    }

    pub fn with_callbacks(mutation: MutationFn<T, V>, callbacks: MutationCallbacks<T>) -> Self {
        Self {
            mutation,
            callbacks,
            data: None,
            loading: false,
            error: None,
        }
    }

    pub async fn mutate(&mut self, variables: V) {
        self.loading = true;
        self.error = None;

        match (self.mutation)(variables).await {
            Ok(envelope) if envelope.success => {
                self.data = envelope.data;
                if let (Some(on_success), Some(data)) = (&self.callbacks.on_success, &self.data) {
                    on_success(data);
                }
            }
            Ok(envelope) => {
                let message = envelope
                    .message
                    .unwrap_or_else(|| "Mutation failed".to_string());
                self.error = Some(message.clone());
                if let Some(on_error) = &self.callbacks.on_error {
                    // Soft failures carry no HTTP status; status 0 marks the
                    // synthesized error
                    on_error(&ApiError::Http {
                        status: 0,
                        message,
                        errors: Vec::new(),
                    });
                }
            }
            Err(err) => {
                self.error = Some(err.message());
                if let Some(on_error) = &self.callbacks.on_error {
                    on_error(&err);
                }
            }
        }

        if let Some(on_settled) = &self.callbacks.on_settled {
            on_settled();
        }
        self.loading = false;
    }

    /// Restore the initial state: no data, no error, not loading.
    pub fn reset(&mut self) {
        self.data = None;
        self.error = None;
        self.loading = false;
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
