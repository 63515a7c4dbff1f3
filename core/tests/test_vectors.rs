//! Verify client operations against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector names an operation and its arguments, the request the client
//! must send, a simulated server response, and either the expected decoded
//! result or the expected error. Results are compared as a JSON subset, so a
//! vector only pins the fields it cares about.

use std::sync::Mutex;

use serde_json::Value;
use todoist_core::{
    ApiError, CommentFilter, Config, HttpMethod, HttpRequest, HttpResponse, TaskFilter,
    TodoistClient, Transport,
};

const BASE_URL: &str = "http://localhost:3000";

/// Replays one simulated response and keeps the request it was given.
struct Replay {
    response: HttpResponse,
    seen: Mutex<Option<HttpRequest>>,
}

impl Transport for Replay {
    fn execute(&self, request: &HttpRequest) -> todoist_core::Result<HttpResponse> {
        *self.seen.lock().unwrap() = Some(request.clone());
        Ok(self.response.clone())
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn string_arg(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(Value::as_str).map(str::to_string)
}

fn params<T: serde::de::DeserializeOwned>(args: &Value) -> T {
    serde_json::from_value(args["params"].clone()).unwrap()
}

fn to_json<T: serde::Serialize>(result: todoist_core::Result<T>) -> todoist_core::Result<Value> {
    result.map(|v| serde_json::to_value(v).unwrap())
}

/// Dispatch a vector's operation name to the matching client method.
fn run(client: &TodoistClient<Replay>, operation: &str, args: &Value) -> todoist_core::Result<Value> {
    let id = || string_arg(args, "id").expect("vector is missing id");
    match operation {
        "create_task" => to_json(client.create_task(&params(args))),
        "get_task" => to_json(client.get_task(&id())),
        "list_tasks" => to_json(client.list_tasks(&TaskFilter {
            project_id: string_arg(args, "project_id"),
            section_id: string_arg(args, "section_id"),
            label: string_arg(args, "label"),
        })),
        "close_task" => to_json(client.close_task(&id())),
        "reopen_task" => to_json(client.reopen_task(&id())),
        "delete_task" => to_json(client.delete_task(&id())),
        "update_project" => to_json(client.update_project(&id(), &params(args))),
        "delete_project" => to_json(client.delete_project(&id())),
        "list_sections" => to_json(client.list_sections(string_arg(args, "project_id").as_deref())),
        "list_comments" => to_json(client.list_comments(&CommentFilter {
            task_id: string_arg(args, "task_id"),
            project_id: string_arg(args, "project_id"),
        })),
        "create_label" => to_json(client.create_label(&params(args))),
        "list_shared_labels" => {
            let omit = args["omit_personal"].as_bool().unwrap_or(false);
            to_json(client.list_shared_labels(omit))
        }
        "rename_shared_label" => to_json(client.rename_shared_label(&params(args))),
        "remove_shared_label" => to_json(client.remove_shared_label(&params(args))),
        other => panic!("unknown operation: {other}"),
    }
}

/// Every key in `expected` must be present in `actual` with a matching value.
fn assert_subset(actual: &Value, expected: &Value, name: &str) {
    match (actual, expected) {
        (Value::Object(a), Value::Object(e)) => {
            for (key, value) in e {
                let got = a
                    .get(key)
                    .unwrap_or_else(|| panic!("{name}: missing field {key}"));
                assert_subset(got, value, name);
            }
        }
        (Value::Array(a), Value::Array(e)) => {
            assert_eq!(a.len(), e.len(), "{name}: array length");
            for (got, want) in a.iter().zip(e) {
                assert_subset(got, want, name);
            }
        }
        _ => assert_eq!(actual, expected, "{name}: value"),
    }
}

fn check_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let transport = Replay {
            response: HttpResponse {
                status: sim["status"].as_u64().unwrap() as u16,
                headers: Vec::new(),
                body: sim["body"].as_str().unwrap().to_string(),
            },
            seen: Mutex::new(None),
        };
        let config = Config::new("vector-token").with_base_url(BASE_URL);
        let client = TodoistClient::with_transport(config, transport).unwrap();

        let result = run(&client, case["operation"].as_str().unwrap(), &case["args"]);

        // Verify the request
        let req = client_request(&client, name);
        let expected_req = &case["expected_request"];
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match expected_req.get("body") {
            Some(body) => {
                let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&sent, body, "{name}: body");
            }
            None => assert!(req.body.is_none(), "{name}: body should be None"),
        }

        // Verify the outcome
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error["kind"].as_str().unwrap() {
                "UnexpectedStatus" => {
                    let status = expected_error["status"].as_u64().unwrap() as u16;
                    assert_eq!(err.status(), Some(status), "{name}: status");
                    assert!(err.to_string().contains(&status.to_string()), "{name}: message");
                }
                "Deserialization" => {
                    assert!(matches!(err, ApiError::Deserialization(_)), "{name}: expected Deserialization")
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let value = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
            assert_subset(&value, &case["expected_result"], name);
        }
    }
}

fn client_request(client: &TodoistClient<Replay>, name: &str) -> HttpRequest {
    client
        .transport()
        .seen
        .lock()
        .unwrap()
        .clone()
        .unwrap_or_else(|| panic!("{name}: no request was sent"))
}

#[test]
fn task_vectors() {
    check_vectors(include_str!("../../test-vectors/tasks.json"));
}

#[test]
fn project_vectors() {
    check_vectors(include_str!("../../test-vectors/projects.json"));
}

#[test]
fn label_vectors() {
    check_vectors(include_str!("../../test-vectors/labels.json"));
}
