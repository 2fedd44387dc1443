//! Integration tests exercising the full HTTP surface against a mock server.

use chrono::NaiveDate;
use followmee_client::{FollowMeeClient, FollowMeeError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FollowMeeClient {
    FollowMeeClient::builder("test-key", "test-user")
        .base_url(format!("{}/", server.uri()))
        .build()
}

fn device_list_body() -> serde_json::Value {
    json!({
        "Data": [
            {
                "DeviceID": "866423549",
                "DeviceName": "Work Phone",
                "Platform": "Android",
                "Edition": "Standard",
                "Group": "Field Crew",
                "Active": "1",
                "TrackerState": "11",
                "TrackerStateTime": "2021-06-01T08:30:00-0400",
                "Battery": "73%",
                "BatteryTime": "2021-06-01T08:25:00-0400",
            },
            {
                "DeviceID": "990011223",
                "DeviceName": "Van",
                "Platform": "iOS",
                "Edition": "Standard",
                "Group": "Field Crew",
                "Active": "0",
                "TrackerState": "2",
                "TrackerStateTime": "2021-06-01T07:00:00-0400",
                "Battery": "100%",
                "BatteryTime": "2021-06-01T07:00:00-0400",
            },
        ]
    })
}

fn track_body() -> serde_json::Value {
    json!({
        "Data": [
            {
                "DeviceName": "Work Phone",
                "DeviceID": "866423549",
                "Date": "2021-06-01T08:30:00-0400",
                "Latitude": 44.478,
                "Longitude": -73.212,
                "Type": "motion",
                "Speed(mph)": 31,
                "Speed(km/h)": 50,
                "Direction": 270,
                "Altitude(ft)": 223,
                "Altitude(m)": 68,
                "Accuracy": 10,
                "Battery": "73%",
            },
        ]
    })
}

#[tokio::test]
async fn device_list_parses_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info.aspx"))
        .and(query_param("function", "devicelist"))
        .and(query_param("key", "test-key"))
        .and(query_param("username", "test-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(device_list_body()))
        .expect(1)
        .mount(&server)
        .await;

    let devices = client_for(&server).devices().list().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].device_id, "866423549");
    assert!(devices[0].active);
    assert!((devices[0].battery - 0.73).abs() < f64::EPSILON);
    assert!(!devices[1].active);
    assert!((devices[1].battery - 1.0).abs() < f64::EPSILON);
    assert_eq!(
        devices[0].tracker_state_time.to_rfc3339(),
        "2021-06-01T08:30:00-04:00"
    );
}

#[tokio::test]
async fn current_for_devices_joins_ids_and_sends_address_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "currentfordevice"))
        .and(query_param("output", "json"))
        .and(query_param("deviceid", "866423549,990011223"))
        .and(query_param("address", "1"))
        .and(query_param("key", "test-key"))
        .and(query_param("username", "test-user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .current_for_devices(["866423549", "990011223"])
        .address(true)
        .send()
        .await
        .unwrap();

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].speed_mph, 31);
    assert_eq!(samples[0].altitude_ft, 223);
    assert_eq!(samples[0].coordinates(), (44.478, -73.212));
}

#[tokio::test]
async fn address_flag_defaults_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "currentfordevice"))
        .and(query_param("address", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .current_for_devices(["866423549"])
        .send()
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn empty_group_list_omits_groupid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "currentforalldevices"))
        .and(query_param_is_missing("groupid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .current_for_all_devices()
        .send()
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn group_ids_encode_comma_joined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "currentforalldevices"))
        .and(query_param("groupid", "5,9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .current_for_all_devices()
        .group_ids(["5", "9"])
        .send()
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn history_sends_hours_and_visit_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "historyfordevice"))
        .and(query_param("deviceid", "866423549"))
        .and(query_param("history", "6"))
        .and(query_param("address", "0"))
        .and(query_param("visit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .history_for_device("866423549", 6)
        .visit_info(true)
        .send()
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn history_for_all_devices_sends_hours() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "historyforalldevices"))
        .and(query_param("history", "24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .history_for_all_devices(24)
        .send()
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn date_range_formats_dates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "daterangefordevice"))
        .and(query_param("deviceid", "866423549"))
        .and(query_param("from", "2021-06-01"))
        .and(query_param("to", "2021-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .date_range_for_device(
            "866423549",
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 6, 30).unwrap(),
        )
        .send()
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn date_range_for_all_devices_takes_groups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks.aspx"))
        .and(query_param("function", "daterangeforalldevices"))
        .and(query_param("from", "2021-06-01"))
        .and(query_param("to", "2021-06-02"))
        .and(query_param("groupid", "7"))
        .and(query_param("visit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_body()))
        .expect(1)
        .mount(&server)
        .await;

    let samples = client_for(&server)
        .tracks()
        .date_range_for_all_devices(
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 6, 2).unwrap(),
        )
        .group_ids(["7"])
        .send()
        .await
        .unwrap();
    assert_eq!(samples.len(), 1);
}

#[tokio::test]
async fn no_data_sentinel_is_an_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Error": "No data returned for your query"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.devices().list().await.unwrap().is_empty());
    assert!(client
        .tracks()
        .history_for_all_devices(1)
        .send()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn api_error_message_is_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Error": "Invalid API key"})))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert!(matches!(err, FollowMeeError::Api(_)));
    assert_eq!(err.to_string(), "Invalid API key");
}

#[tokio::test]
async fn non_success_status_carries_code_and_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert!(matches!(err, FollowMeeError::Status { code: 500, .. }));
    assert_eq!(err.to_string(), "500: Internal Server Error");
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).devices().list().await.unwrap_err();
    assert!(matches!(err, FollowMeeError::Decode { .. }));
    assert_eq!(err.to_string(), "Bad JSON in response");
}

#[tokio::test]
async fn empty_data_array_is_an_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Data": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.devices().list().await.unwrap().is_empty());
    assert!(client
        .tracks()
        .current_for_all_devices()
        .send()
        .await
        .unwrap()
        .is_empty());
}
