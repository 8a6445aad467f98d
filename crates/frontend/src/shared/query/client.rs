//! Response cache with in-flight de-duplication.
//!
//! Requests are identified by endpoint path plus [`QueryKey`]. A request whose
//! identity is already cached is answered from the cache; one that is already
//! on the wire is joined instead of being sent again. Failed responses are
//! never cached.

use crate::shared::api_utils::{self, ApiError};
use crate::config::config;
use contracts::shared::query::{ListQuery, QueryKey};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId {
    pub path: String,
    pub key: QueryKey,
}

impl RequestId {
    pub fn new(path: &str, key: QueryKey) -> Self {
        Self {
            path: path.to_string(),
            key,
        }
    }
}

type Body = Rc<str>;
type SharedFetch = Shared<LocalBoxFuture<'static, Result<Body, ApiError>>>;

/// Bounded FIFO of successful response bodies
#[derive(Debug)]
pub struct ResponseCache {
    capacity: usize,
    entries: HashMap<RequestId, Body>,
    order: VecDeque<RequestId>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, id: &RequestId) -> Option<Body> {
        self.entries.get(id).cloned()
    }

    pub fn insert(&mut self, id: RequestId, body: Body) {
        if self.entries.insert(id.clone(), body).is_none() {
            self.order.push_back(id);
        }
        while self.entries.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    pub fn remove(&mut self, id: &RequestId) {
        if self.entries.remove(id).is_some() {
            self.order.retain(|k| k != id);
        }
    }

    pub fn invalidate_module(&mut self, module: &str) {
        self.entries.retain(|id, _| id.key.module != module);
        self.order.retain(|id| id.key.module != module);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct InFlight {
    serial: u64,
    future: SharedFetch,
}

struct ClientState {
    cache: ResponseCache,
    in_flight: HashMap<RequestId, InFlight>,
    next_serial: u64,
    network_requests: u64,
}

#[derive(Clone)]
pub struct QueryCache {
    state: Rc<RefCell<ClientState>>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(ClientState {
                cache: ResponseCache::new(capacity),
                in_flight: HashMap::new(),
                next_serial: 0,
                network_requests: 0,
            })),
        }
    }

    /// Resolve a request: cache hit, join an in-flight request, or call `fetcher`.
    pub async fn fetch<F, Fut>(&self, id: RequestId, fetcher: F) -> Result<Body, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, ApiError>> + 'static,
    {
        let (serial, future) = {
            let mut st = self.state.borrow_mut();
            if let Some(body) = st.cache.get(&id) {
                return Ok(body);
            }
            match st.in_flight.get(&id) {
                Some(flight) => (flight.serial, flight.future.clone()),
                None => {
                    st.next_serial += 1;
                    st.network_requests += 1;
                    let serial = st.next_serial;
                    let future = fetcher()
                        .map(|r| r.map(Body::from))
                        .boxed_local()
                        .shared();
                    st.in_flight.insert(
                        id.clone(),
                        InFlight {
                            serial,
                            future: future.clone(),
                        },
                    );
                    (serial, future)
                }
            }
        };

        let result = future.await;

        // первый завершившийся участник переносит ответ в кэш
        let mut st = self.state.borrow_mut();
        let owned = st
            .in_flight
            .get(&id)
            .is_some_and(|flight| flight.serial == serial);
        if owned {
            st.in_flight.remove(&id);
            if let Ok(body) = &result {
                st.cache.insert(id, body.clone());
            }
        }
        result
    }

    /// [`fetch`](Self::fetch) plus decoding. A body that does not decode as `T`
    /// is evicted so the next request goes to the network again.
    pub async fn fetch_decoded<T, F, Fut>(&self, id: RequestId, fetcher: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, ApiError>> + 'static,
    {
        let body = self.fetch(id.clone(), fetcher).await?;
        api_utils::decode(&body).map_err(|e| {
            log::warn!("evicting undecodable response for {}: {}", id.key.describe(), e);
            self.state.borrow_mut().cache.remove(&id);
            e
        })
    }

    /// Drop cached responses and forget in-flight requests of a module.
    /// Requests already on the wire still resolve for their callers but are not cached.
    pub fn invalidate(&self, module: &str) {
        let mut st = self.state.borrow_mut();
        st.cache.invalidate_module(module);
        st.in_flight.retain(|id, _| id.key.module != module);
    }

    pub fn evict(&self, id: &RequestId) {
        let mut st = self.state.borrow_mut();
        st.cache.remove(id);
        st.in_flight.remove(id);
    }

    pub fn network_requests(&self) -> u64 {
        self.state.borrow().network_requests
    }

    pub fn cached_len(&self) -> usize {
        self.state.borrow().cache.len()
    }
}

/// `Copy` handle to the cache, provided through context
#[derive(Clone, Copy)]
pub struct QueryClient {
    inner: StoredValue<QueryCache, LocalStorage>,
    /// Bumped on invalidation so mounted views of the module refetch
    revisions: RwSignal<HashMap<String, u64>>,
}

impl QueryClient {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: StoredValue::new_local(QueryCache::new(capacity)),
            revisions: RwSignal::new(HashMap::new()),
        }
    }

    fn cache(&self) -> QueryCache {
        self.inner.get_value()
    }

    /// GET `path` with the parameters of `query`, decoded as `T`
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<T, ApiError> {
        let id = RequestId::new(path, query.key());
        let url = format!("{}{}", path, query.to_query_string());
        log::debug!("query {} -> {}", id.key.describe(), url);
        self.cache()
            .fetch_decoded(id, move || async move { api_utils::get_text(&url).await })
            .await
    }

    /// Drop cached responses of `module` and make its mounted views refetch
    pub fn invalidate(&self, module: &str) {
        log::debug!("invalidate cache for module '{}'", module);
        self.cache().invalidate(module);
        self.revisions
            .update(|r| *r.entry(module.to_string()).or_insert(0) += 1);
    }

    /// Tracked read: changes after every `invalidate(module)`
    pub fn revision(&self, module: &str) -> u64 {
        self.revisions.with(|r| r.get(module).copied().unwrap_or(0))
    }

    pub fn evict(&self, path: &str, key: &QueryKey) {
        self.cache().evict(&RequestId::new(path, key.clone()));
    }
}

pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new(config().cache_capacity);
    provide_context(client);
    client
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().unwrap_or_else(|| {
        log::warn!("QueryClient not provided, using a detached instance");
        QueryClient::new(config().cache_capacity)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn id(module: &str, page: u32) -> RequestId {
        let mut query = ListQuery::new(module);
        query.page = Some(contracts::shared::query::PageState {
            current_page: page,
            ..Default::default()
        });
        RequestId::new("/api/test", query.key())
    }

    #[test]
    fn test_identical_keys_share_one_request() {
        let cache = QueryCache::new(8);
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel::<String>();

        let first = {
            let calls = calls.clone();
            cache.fetch(id("sales_invoice", 1), move || {
                calls.set(calls.get() + 1);
                async move { rx.await.map_err(|_| ApiError::Network("cancelled".into())) }
            })
        };
        let second = {
            let calls = calls.clone();
            cache.fetch(id("sales_invoice", 1), move || {
                calls.set(calls.get() + 1);
                async move { Ok::<_, ApiError>("second".to_string()) }
            })
        };
        let release = async move {
            let _ = tx.send("shared".to_string());
        };

        let (a, b, ()) = block_on(async { futures::join!(first, second, release) });
        assert_eq!(a.unwrap().as_ref(), "shared");
        assert_eq!(b.unwrap().as_ref(), "shared");
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.network_requests(), 1);

        // повторный запрос обслуживается из кэша
        let again = block_on(cache.fetch(id("sales_invoice", 1), || async {
            Ok::<_, ApiError>("fresh".to_string())
        }));
        assert_eq!(again.unwrap().as_ref(), "shared");
        assert_eq!(cache.network_requests(), 1);
    }

    #[test]
    fn test_new_key_triggers_exactly_one_fetch() {
        let cache = QueryCache::new(8);
        block_on(cache.fetch(id("sales_invoice", 1), || async { Ok::<_, ApiError>("p1".into()) }))
            .unwrap();
        block_on(cache.fetch(id("sales_invoice", 2), || async { Ok::<_, ApiError>("p2".into()) }))
            .unwrap();
        block_on(cache.fetch(id("sales_invoice", 2), || async { Ok::<_, ApiError>("p2".into()) }))
            .unwrap();
        assert_eq!(cache.network_requests(), 2);
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = QueryCache::new(8);
        let err = block_on(cache.fetch(id("products", 1), || async {
            Err::<String, _>(ApiError::Http {
                status: 500,
                message: "boom".into(),
            })
        }));
        assert!(err.is_err());
        let ok = block_on(cache.fetch(id("products", 1), || async { Ok::<_, ApiError>("ok".into()) }));
        assert_eq!(ok.unwrap().as_ref(), "ok");
        assert_eq!(cache.network_requests(), 2);
    }

    #[test]
    fn test_undecodable_body_is_not_cached() {
        let cache = QueryCache::new(8);
        let broken = block_on(cache.fetch_decoded::<Vec<u32>, _, _>(id("products", 1), || async {
            Ok::<_, ApiError>("<html>proxy error</html>".into())
        }));
        assert!(matches!(broken, Err(ApiError::Decode(_))));
        assert_eq!(cache.cached_len(), 0);

        let fixed = block_on(cache.fetch_decoded::<Vec<u32>, _, _>(id("products", 1), || async {
            Ok::<_, ApiError>("[1,2]".into())
        }));
        assert_eq!(fixed, Ok(vec![1, 2]));
        assert_eq!(cache.network_requests(), 2);
        assert_eq!(cache.cached_len(), 1);
    }

    #[test]
    fn test_invalidate_module_forces_refetch() {
        let cache = QueryCache::new(8);
        block_on(cache.fetch(id("products", 1), || async { Ok::<_, ApiError>("v1".into()) })).unwrap();
        block_on(cache.fetch(id("categories", 1), || async { Ok::<_, ApiError>("c1".into()) }))
            .unwrap();

        cache.invalidate("products");
        assert_eq!(cache.cached_len(), 1);

        let body =
            block_on(cache.fetch(id("products", 1), || async { Ok::<_, ApiError>("v2".into()) }))
                .unwrap();
        assert_eq!(body.as_ref(), "v2");
        assert_eq!(cache.network_requests(), 3);
    }

    #[test]
    fn test_client_invalidate_bumps_revision() {
        let owner = Owner::new();
        owner.with(|| {
            let client = QueryClient::new(4);
            assert_eq!(client.revision("products"), 0);
            client.invalidate("products");
            client.invalidate("products");
            assert_eq!(client.revision("products"), 2);
            assert_eq!(client.revision("categories"), 0);
        });
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut cache = ResponseCache::new(2);
        cache.insert(id("m", 1), Body::from("1"));
        cache.insert(id("m", 2), Body::from("2"));
        cache.insert(id("m", 3), Body::from("3"));
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&id("m", 1)).is_none());
        assert!(cache.get(&id("m", 3)).is_some());
    }
}
