//! Behaviour of the cache-or-fetch provider against fake and mock transports

use aoc_http_client::{AocClient, Url};
use aoc_input::buffer::BufferError;
use aoc_input::{FetchError, HttpFetcher, InputError, InputProvider, InputSource, Session};
use proptest::prelude::*;
use std::fs;
use std::path::Path;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

/// Fetcher that records every call and answers with a fixed body or an error
#[derive(Default)]
struct FakeFetcher {
    body: Option<Vec<u8>>,
    delay: Duration,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, String)>>,
}

impl FakeFetcher {
    fn returning(body: &[u8]) -> Self {
        Self {
            body: Some(body.to_vec()),
            ..Self::default()
        }
    }

    fn offline() -> Self {
        Self::default()
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpFetcher for FakeFetcher {
    fn fetch(&self, url: &Url, session: &Session) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((url.to_string(), session.expose().to_string()));
        std::thread::sleep(self.delay);
        self.body
            .clone()
            .ok_or_else(|| FetchError::Other("network unavailable".into()))
    }
}

fn session() -> Option<Session> {
    Session::new("0123456789abcdef")
}

fn provider<'a>(
    dir: &Path,
    fetcher: &'a FakeFetcher,
    session: Option<Session>,
) -> InputProvider<&'a FakeFetcher> {
    InputProvider::builder()
        .cache_dir(dir)
        .session(session)
        .build_with(fetcher)
}

#[test]
fn cached_file_is_returned_without_network() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2015-02.txt"), b"2x3x4\n1x1x10\n").unwrap();
    let fetcher = FakeFetcher::returning(b"should not be used");

    let input = provider(temp.path(), &fetcher, session())
        .get_input(2015, 2)
        .unwrap();

    assert_eq!(input.as_bytes(), b"2x3x4\n1x1x10\n");
    assert_eq!(input.source(), InputSource::Cache);
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn cached_file_is_used_even_without_session() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2015-01.txt"), b"(()(").unwrap();
    let fetcher = FakeFetcher::offline();

    let input = provider(temp.path(), &fetcher, None).get_input(2015, 1).unwrap();

    assert_eq!(input.as_str().unwrap(), "(()(");
}

#[test]
fn empty_cache_file_is_valid_input() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("2015-03.txt"), b"").unwrap();
    let fetcher = FakeFetcher::returning(b"^>v<");

    let input = provider(temp.path(), &fetcher, session())
        .get_input(2015, 3)
        .unwrap();

    assert!(input.is_empty());
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn invalid_keys_touch_neither_filesystem_nor_network() {
    let temp = TempDir::new().unwrap();
    let cache_dir = temp.path().join("never-created");
    let fetcher = FakeFetcher::returning(b"data");
    let provider = provider(&cache_dir, &fetcher, session());

    for (year, day) in [(2014, 1), (2015, 0), (2015, 26)] {
        let result = provider.get_input(year, day);
        assert!(
            matches!(result, Err(InputError::InvalidKey { .. })),
            "({}, {}) should be rejected, got {:?}",
            year,
            day,
            result
        );
    }

    assert_eq!(fetcher.calls(), 0);
    assert!(!cache_dir.exists());
}

#[test]
fn fetched_input_is_cached_verbatim() {
    let temp = TempDir::new().unwrap();
    let body = b"line one\n\0binary\r\nno trailing newline";
    let fetcher = FakeFetcher::returning(body);

    let input = provider(temp.path(), &fetcher, session())
        .get_input(2016, 9)
        .unwrap();

    assert_eq!(input.as_bytes(), body);
    assert_eq!(input.len(), body.len());
    assert_eq!(input.source(), InputSource::Remote);
    assert_eq!(fs::read(temp.path().join("2016-09.txt")).unwrap(), body);

    // Second call with the network gone is served from the cache
    let offline = FakeFetcher::offline();
    let again = provider(temp.path(), &offline, session())
        .get_input(2016, 9)
        .unwrap();
    assert_eq!(again.as_bytes(), body);
    assert_eq!(again.source(), InputSource::Cache);
    assert_eq!(offline.calls(), 0);
}

#[test]
fn fetch_uses_input_url_and_session() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher::returning(b"1\n");

    provider(temp.path(), &fetcher, session())
        .get_input(2015, 2)
        .unwrap();

    let seen = fetcher.seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![(
            "https://adventofcode.com/2015/day/2/input".to_string(),
            "0123456789abcdef".to_string()
        )]
    );
}

#[test]
fn missing_session_fails_before_network() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher::returning(b"data");

    let result = provider(temp.path(), &fetcher, None).get_input(2015, 1);

    match result {
        Err(InputError::MissingCredential { key }) => {
            assert_eq!((key.year(), key.day()), (2015, 1));
        }
        other => panic!("Expected MissingCredential, got {:?}", other),
    }
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn explicit_session_overrides_missing_configuration() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher::returning(b"abc");
    let explicit = Session::new("explicit-token").unwrap();

    let input = provider(temp.path(), &fetcher, None)
        .get_input_with_session(2015, 4, &explicit)
        .unwrap();

    assert_eq!(input.as_bytes(), b"abc");
    assert_eq!(fetcher.seen.lock().unwrap()[0].1, "explicit-token");
}

#[test]
fn session_token_reaches_fetcher_unchanged() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher::returning(b"abc");

    provider(temp.path(), &fetcher, Session::new(" tok en \t"))
        .get_input(2015, 4)
        .unwrap();

    assert_eq!(fetcher.seen.lock().unwrap()[0].1, " tok en \t");
}

/// Shared sink for formatted log lines
#[derive(Clone, Default)]
struct LogSink(Arc<Mutex<Vec<u8>>>);

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failures_are_returned_not_logged_as_errors() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher::offline();
    let sink = LogSink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let p = provider(temp.path(), &fetcher, None);
        assert!(p.get_input(2015, 4).is_err());
        assert!(p.get_input(2015, 26).is_err());
        assert!(p.get_input_with_session(2015, 5, &session().unwrap()).is_err());
    });

    let logged = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
    assert!(logged.is_empty(), "unexpected log output: {}", logged);
}

#[test]
fn fetch_failure_leaves_no_cache_file() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher::offline();

    let result = provider(temp.path(), &fetcher, session()).get_input(2015, 5);

    assert!(matches!(result, Err(InputError::FetchFailure { .. })));
    assert_eq!(fetcher.calls(), 1);
    assert!(!temp.path().join("2015-05.txt").exists());
}

#[test]
fn unwritable_cache_still_returns_fetched_input() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("plain-file");
    fs::write(&blocker, b"").unwrap();
    let fetcher = FakeFetcher::returning(b"ugknbfddgicrmopn");

    let input = provider(&blocker.join("cache"), &fetcher, session())
        .get_input(2015, 5)
        .unwrap();

    assert_eq!(input.as_bytes(), b"ugknbfddgicrmopn");
    assert_eq!(input.source(), InputSource::Remote);
}

#[test]
fn unreadable_cache_entry_does_not_fall_back_to_network() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("2015-06.txt")).unwrap();
    let fetcher = FakeFetcher::returning(b"turn on 0,0 through 999,999");

    let result = provider(temp.path(), &fetcher, session()).get_input(2015, 6);

    assert!(matches!(result, Err(InputError::ReadFailure { .. })));
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn allocation_failure_from_fetcher_is_reported() {
    struct Exhausted;
    impl HttpFetcher for Exhausted {
        fn fetch(&self, _url: &Url, _session: &Session) -> Result<Vec<u8>, FetchError> {
            let err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
            Err(FetchError::Body(BufferError::Allocation(err)))
        }
    }

    let temp = TempDir::new().unwrap();
    let provider = InputProvider::builder()
        .cache_dir(temp.path())
        .session(session())
        .build_with(Exhausted);

    let result = provider.get_input(2015, 7);
    assert!(matches!(result, Err(InputError::AllocationFailure(_))));
}

#[test]
fn concurrent_callers_share_one_fetch() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher {
        body: Some(b"shared".to_vec()),
        delay: Duration::from_millis(50),
        ..FakeFetcher::default()
    };
    let provider = provider(temp.path(), &fetcher, session());

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| provider.get_input(2015, 8).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().as_bytes(), b"shared");
        }
    });

    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn different_keys_fetch_independently() {
    let temp = TempDir::new().unwrap();
    let fetcher = FakeFetcher::returning(b"x");
    let provider = provider(temp.path(), &fetcher, session());

    std::thread::scope(|s| {
        for day in 1..=5u8 {
            let provider = &provider;
            s.spawn(move || provider.get_input(2017, day).unwrap());
        }
    });

    assert_eq!(fetcher.calls(), 5);
    for day in 1..=5u8 {
        assert!(temp.path().join(format!("2017-{:02}.txt", day)).is_file());
    }
}

#[test]
fn end_to_end_with_http_server() {
    let body: String = (0..1000).map(|i| format!("{}x{}x{}\n", i, i + 1, i + 2)).collect();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2015/day/2/input")
        .match_header("cookie", "session=0123456789abcdef")
        .with_status(200)
        .with_body(&body)
        .expect(1)
        .create();

    let temp = TempDir::new().unwrap();
    let provider = InputProvider::builder()
        .cache_dir(temp.path())
        .session(session())
        .endpoint(server.url())
        .unwrap()
        .build()
        .unwrap();

    let first = provider.get_input(2015, 2).unwrap();
    let second = provider.get_input(2015, 2).unwrap();

    assert_eq!(first.as_str().unwrap(), body);
    assert_eq!(second.as_bytes(), first.as_bytes());
    assert_eq!(second.source(), InputSource::Cache);
    assert_eq!(fs::read_to_string(temp.path().join("2015-02.txt")).unwrap(), body);
    mock.assert();
}

#[test]
fn http_error_status_is_fetch_failure() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2015/day/9/input")
        .with_status(404)
        .with_body("Please don't repeatedly request this endpoint before it unlocks!")
        .expect(1)
        .create();

    let temp = TempDir::new().unwrap();
    let client = AocClient::new().unwrap();
    let provider = InputProvider::builder()
        .cache_dir(temp.path())
        .session(session())
        .endpoint(server.url())
        .unwrap()
        .build_with(client);

    let result = provider.get_input(2015, 9);

    assert!(matches!(
        result,
        Err(InputError::FetchFailure {
            source: FetchError::Transport(_),
            ..
        })
    ));
    assert!(!temp.path().join("2015-09.txt").exists());
    mock.assert();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_out_of_range_days_rejected(year in 2015u16..2100, day in prop_oneof![Just(0u8), 26u8..=255]) {
        let temp = TempDir::new().unwrap();
        let fetcher = FakeFetcher::returning(b"data");

        let result = provider(temp.path(), &fetcher, session()).get_input(year, day);

        prop_assert!(
            matches!(result, Err(InputError::InvalidKey { .. })),
            "Expected InvalidKey for day {}",
            day
        );
        prop_assert_eq!(fetcher.calls(), 0);
    }

    #[test]
    fn prop_cached_content_is_returned_verbatim(
        year in 2015u16..2030,
        day in 1u8..=25,
        content in prop::collection::vec(any::<u8>(), 0..4096),
    ) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(format!("{}-{:02}.txt", year, day)), &content).unwrap();
        let fetcher = FakeFetcher::offline();

        let input = provider(temp.path(), &fetcher, None).get_input(year, day).unwrap();

        prop_assert_eq!(input.into_bytes(), content);
        prop_assert_eq!(fetcher.calls(), 0);
    }
}
