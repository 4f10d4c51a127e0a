//! End-to-end tests against a local mock server: bodies on the wire,
//! callback delivery, query merging as observed by the server, and the
//! no-I/O guarantee for sticky errors.

use mockito::Matcher;
use serde::{Deserialize, Serialize};
use zing::{ContentType, Error, Http, RequestBuilder};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Pet {
    name: String,
    color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    age: u32,
    name: String,
    pet: Pet,
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn get_with_header_invokes_callback() {
    init_logging();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/")
        .match_header("Key", "Value")
        .with_status(202)
        .with_body("Hello world")
        .expect(1)
        .create();

    Http::get(format!("{}/", server.url()))
        .header("Key", "Value")
        .send_with(|result| {
            let response = result.expect("request should succeed");
            assert_eq!(response.status().as_u16(), 202);
            assert_eq!(response.text().expect("body"), "Hello world");
        });

    // The mock only matches GET with the header attached.
    mock.assert();
}

#[test]
fn post_json_round_trip() {
    init_logging();
    // The server swaps the person's pet, so the response differs from
    // the request and a blind echo cannot pass.
    let joe = Person {
        age: 27,
        name: "Joe".to_string(),
        pet: Pet {
            name: "Miumiu".to_string(),
            color: "white".to_string(),
        },
    };
    let mut returned_person = joe.clone();
    returned_person.pet = Pet {
        name: "wangwang".to_string(),
        color: "black".to_string(),
    };

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/changepet")
        .match_header("Content-Type", "application/json")
        .match_body(Matcher::Json(
            serde_json::to_value(&joe).expect("person json"),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&returned_person).expect("person json"))
        .expect(1)
        .create();

    Http::post(format!("{}/changepet", server.url()))
        .content_type(ContentType::ApplicationJson)
        .body(&joe)
        .send_with(|result| {
            let response = result.expect("request should succeed");
            let returned: Person =
                serde_json::from_str(&response.text().expect("body")).expect("person response");
            assert_eq!(returned.name, "Joe");
            assert_eq!(returned.age, 27);
            assert_eq!(returned.pet.name, "wangwang");
        });

    mock.assert();
}

#[test]
fn text_body_arrives_byte_for_byte() {
    init_logging();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/echo")
        .match_body(Matcher::Exact("Hello world!".to_string()))
        .with_body("Hello world!")
        .expect(1)
        .create();

    let mut builder = Http::post(format!("{}/echo", server.url())).text_body("Hello world!");
    let response = builder.send().expect("echo request");
    assert_eq!(response.text().expect("body"), "Hello world!");

    mock.assert();
}

#[test]
fn raw_body_arrives_verbatim() {
    init_logging();
    // Non-UTF-8 payload; only an exact byte match satisfies the mock.
    let payload = vec![0u8, 159, 146, 150];

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/echo")
        .match_body(Matcher::from(payload.clone()))
        .expect(1)
        .create();

    let mut builder = Http::post(format!("{}/echo", server.url())).raw_body(payload);
    builder.send().expect("echo request");

    mock.assert();
}

#[test]
fn structured_array_round_trips_through_json() {
    init_logging();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/array")
        .match_body(Matcher::Json(serde_json::json!([5, 8])))
        .with_body("[5,8]")
        .expect(1)
        .create();

    let sent = vec![5, 8];
    let mut builder = Http::post(format!("{}/array", server.url())).body(&sent);
    let response = builder.send().expect("array request");
    let returned: Vec<i32> =
        serde_json::from_str(&response.text().expect("body")).expect("array response");
    assert_eq!(returned, sent);

    mock.assert();
}

#[test]
fn server_observes_merged_queries_with_duplicates() {
    init_logging();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            // Matcher::UrlEncoded collapses duplicate keys into a map,
            // so the repeated `k` pairs are matched by regex instead.
            Matcher::Regex("(^|&)k=v0(&|$)".to_string()),
            Matcher::Regex("(^|&)k=v1(&|$)".to_string()),
            Matcher::UrlEncoded("fixed".to_string(), "yes".to_string()),
            Matcher::UrlEncoded("page".to_string(), "2".to_string()),
        ]))
        .expect(1)
        .create();

    let mut builder = Http::get(format!("{}/search?k=v0&fixed=yes", server.url()))
        .append_query("k", "v1")
        .append_queries([("page", "2")]);
    builder.send().expect("query request");

    // Both k=v0 (from the base URL) and k=v1 (appended) reached the
    // server, alongside the other pairs.
    mock.assert();
}

#[test]
fn sticky_error_prevents_any_network_io() {
    init_logging();
    let mut server = mockito::Server::new();
    let untouched = server.mock("GET", Matcher::Any).expect(0).create();

    let mut builder = Http::get(format!("{}/", server.url())).header("", "oops");
    let err = builder.send().unwrap_err();
    assert!(matches!(err, Error::InvalidHeader));

    // Repeated sends keep returning the same stored error.
    assert!(matches!(builder.send().unwrap_err(), Error::InvalidHeader));
    untouched.assert();
}

#[test]
fn builder_is_reusable_after_retargeting() {
    init_logging();
    let mut server = mockito::Server::new();
    let stale = server.mock("GET", "/a").expect(0).create();
    let fresh = server
        .mock("PUT", "/b")
        .match_body(Matcher::Exact("payload".to_string()))
        .with_body("second")
        .expect(1)
        .create();

    let mut builder = RequestBuilder::new()
        .get(format!("{}/a", server.url()))
        .header("", "bad");
    assert!(builder.send().is_err());

    // Re-targeting clears the sticky error and per-request state.
    builder = builder
        .put(format!("{}/b", server.url()))
        .text_body("payload");
    let response = builder.send().expect("second request");
    assert_eq!(response.text().expect("body"), "second");

    stale.assert();
    fresh.assert();
}

#[test]
fn delete_and_patch_send_the_right_methods() {
    init_logging();
    let mut server = mockito::Server::new();
    let delete = server.mock("DELETE", "/item/1").expect(1).create();
    let patch = server.mock("PATCH", "/item/1").expect(1).create();
    let head = server.mock("HEAD", "/item/1").expect(1).create();

    Http::delete(format!("{}/item/1", server.url()))
        .send()
        .expect("delete");
    Http::patch(format!("{}/item/1", server.url()))
        .send()
        .expect("patch");
    Http::head(format!("{}/item/1", server.url()))
        .send()
        .expect("head");

    delete.assert();
    patch.assert();
    head.assert();
}

#[test]
fn connection_refused_surfaces_as_transport_error() {
    init_logging();
    // Grab a loopback port and release it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let mut builder = Http::get(format!("http://{addr}/"));
    let err = builder.send().unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err}");
}
