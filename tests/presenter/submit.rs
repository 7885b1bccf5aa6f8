use httpmock::Method::POST;
use marketdash::{DashError, Phase, Region, ViewState};
use serde_json::json;

#[tokio::test]
async fn empty_input_never_issues_a_network_call() {
    let server = crate::common::setup_server();
    let mock = crate::common::mock_dashboard(&server, crate::common::sample_envelope());

    let mut presenter = crate::common::presenter_for(&server);
    let err = presenter.submit_query("   ").await.unwrap_err();

    assert!(matches!(err, DashError::EmptySymbols));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn too_many_symbols_never_issues_a_network_call() {
    let server = crate::common::setup_server();
    let mock = crate::common::mock_dashboard(&server, crate::common::sample_envelope());

    let input = (1..=11)
        .map(|i| format!("SYM{i}"))
        .collect::<Vec<_>>()
        .join(",");

    let mut presenter = crate::common::presenter_for(&server);
    let err = presenter.submit_query(&input).await.unwrap_err();

    assert!(matches!(err, DashError::TooManySymbols { count: 11 }));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn input_is_trimmed_uppercased_and_empty_segments_dropped() {
    let server = crate::common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/get_stock_data")
            .json_body(json!({"symbols": "AAPL,MSFT"}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(crate::common::sample_envelope());
    });

    let mut presenter = crate::common::presenter_for(&server);
    presenter.submit_query(" aapl , msft ,, ").await.unwrap();

    mock.assert();
    assert_eq!(presenter.phase(), Phase::Idle);
    assert!(presenter.submit_allowed());
}

#[tokio::test]
async fn loading_state_is_reported_while_a_fetch_is_pending() {
    let server = crate::common::setup_server();
    let _mock = crate::common::mock_dashboard(&server, crate::common::sample_envelope());

    let mut presenter = crate::common::presenter_for(&server);
    let pending = presenter.begin_submit("AAPL,MSFT,GOOG").unwrap();

    // The request has not completed; the whole surface reports it.
    assert_eq!(presenter.phase(), Phase::Loading);
    assert!(!presenter.submit_allowed());
    assert_eq!(presenter.quotes_region(), Region::Loading);
    assert_eq!(presenter.news_region(), Region::Loading);

    presenter.finish_submit(pending.fetch().await);

    assert_eq!(presenter.phase(), Phase::Idle);
    assert!(presenter.submit_allowed());
    assert!(matches!(presenter.quotes_region(), Region::Rows(ref rows) if rows.len() == 3));
}

#[tokio::test]
async fn submitting_while_a_fetch_is_pending_is_rejected() {
    let server = crate::common::setup_server();
    let mock = crate::common::mock_dashboard(&server, crate::common::sample_envelope());

    let mut presenter = crate::common::presenter_for(&server);
    let pending = presenter.begin_submit("AAPL").unwrap();

    let err = presenter.begin_submit("MSFT").unwrap_err();
    assert!(matches!(err, DashError::Busy));

    presenter.finish_submit(pending.fetch().await);
    // Only the first submission reached the network.
    assert_eq!(mock.hits(), 1);

    // Back to idle, submission is allowed again.
    assert!(presenter.begin_submit("MSFT").is_ok());
}

#[tokio::test]
async fn server_errors_render_alongside_valid_rows() {
    let server = crate::common::setup_server();
    let _mock = crate::common::mock_dashboard(
        &server,
        json!({
            "stock_data": [
                {"symbol": "AAPL", "price": "190.50", "change": "1.25", "volume": "52300000"}
            ],
            "news_data": [],
            "errors": ["bad symbol: XYZ"]
        }),
    );

    let mut presenter = crate::common::presenter_for(&server);
    presenter.submit_query("AAPL,XYZ").await.unwrap();

    assert_eq!(presenter.error_messages(), ["bad symbol: XYZ"]);
    match presenter.quotes_region() {
        Region::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].symbol, "AAPL");
        }
        other => panic!("expected rows, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_data_without_errors_shows_the_no_data_placeholder() {
    let server = crate::common::setup_server();
    let _mock = crate::common::mock_dashboard(
        &server,
        json!({"stock_data": [], "news_data": [], "errors": []}),
    );

    let mut presenter = crate::common::presenter_for(&server);
    presenter.submit_query("AAPL").await.unwrap();

    assert_eq!(presenter.quotes_region(), Region::NoData);
    assert_eq!(presenter.news_region(), Region::NoData);
}

#[tokio::test]
async fn empty_data_with_errors_leaves_the_regions_empty() {
    let server = crate::common::setup_server();
    let _mock = crate::common::mock_dashboard(
        &server,
        json!({"stock_data": [], "news_data": [], "errors": ["upstream down"]}),
    );

    let mut presenter = crate::common::presenter_for(&server);
    presenter.submit_query("AAPL").await.unwrap();

    assert_eq!(presenter.error_messages(), ["upstream down"]);
    assert_eq!(presenter.quotes_region(), Region::Empty);
    assert_eq!(presenter.news_region(), Region::Empty);
}

#[tokio::test]
async fn transport_failure_keeps_prior_rows_and_renders_one_message() {
    let server = crate::common::setup_server();
    let mut ok_mock = crate::common::mock_dashboard(&server, crate::common::sample_envelope());

    let mut presenter = crate::common::presenter_for(&server);
    presenter.submit_query("AAPL,MSFT,GOOG").await.unwrap();
    assert!(matches!(presenter.quotes_region(), Region::Rows(ref rows) if rows.len() == 3));

    ok_mock.delete();
    let _fail_mock = crate::common::mock_dashboard_status(&server, 500);

    presenter.submit_query("AAPL,MSFT,GOOG").await.unwrap();

    assert_eq!(presenter.error_messages().len(), 1);
    assert!(presenter.error_messages()[0].starts_with("Failed to fetch data:"));
    // The previously fetched lists stay rendered.
    assert!(matches!(presenter.quotes_region(), Region::Rows(ref rows) if rows.len() == 3));
    assert!(presenter.submit_allowed());
}

#[tokio::test]
async fn undecodable_body_is_rendered_as_a_generic_failure() {
    let server = crate::common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(POST).path("/get_stock_data");
        then.status(200).body("<html>gateway error</html>");
    });

    let mut presenter = crate::common::presenter_for(&server);
    presenter.submit_query("AAPL").await.unwrap();

    assert_eq!(presenter.error_messages().len(), 1);
    assert!(presenter.error_messages()[0].starts_with("Failed to fetch data:"));
    assert_eq!(presenter.quotes_region(), Region::Empty);
}

#[tokio::test]
async fn a_new_fetch_resets_the_view_state() {
    let server = crate::common::setup_server();
    let _mock = crate::common::mock_dashboard(&server, crate::common::sample_envelope());

    let mut presenter = crate::common::presenter_for(&server);
    presenter.submit_query("AAPL,MSFT,GOOG").await.unwrap();

    presenter.set_quote_search("zzz-no-match");
    assert!(matches!(presenter.quotes_region(), Region::Rows(ref rows) if rows.is_empty()));

    presenter.submit_query("AAPL,MSFT,GOOG").await.unwrap();
    assert_eq!(*presenter.view(), ViewState::default());
    assert!(matches!(presenter.quotes_region(), Region::Rows(ref rows) if rows.len() == 3));
}
