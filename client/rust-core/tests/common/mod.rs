#![allow(dead_code)]

use async_trait::async_trait;
use codequest_client::{AppState, CommandGateway, CredentialStore, GatewayError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "test-token-123";

/// Scripted gateway for tests: one canned response (or failure) per
/// operation, and a record of every invocation. Operations without a script
/// fail with a transport error, which is exactly what the fallback paths
/// need.
pub struct MockGateway {
    responses: Mutex<HashMap<String, Result<Value, GatewayError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn respond(&self, operation: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(operation.to_string(), Ok(value));
    }

    pub fn fail(&self, operation: &str, status: u16, message: &str) {
        self.responses.lock().unwrap().insert(
            operation.to_string(),
            Err(GatewayError::Remote {
                status,
                message: message.to_string(),
            }),
        );
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| op == operation)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_args(&self, operation: &str) -> Option<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(op, _)| op == operation)
            .map(|(_, args)| args.clone())
    }
}

#[async_trait]
impl CommandGateway for MockGateway {
    async fn invoke(&self, operation: &str, args: Value) -> Result<Value, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), args));

        match self.responses.lock().unwrap().get(operation) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(err)) => Err(err.clone()),
            None => Err(GatewayError::Transport(format!(
                "no scripted response for {}",
                operation
            ))),
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Services wired to the mock gateway with a stored session token.
pub fn authed_state(gateway: Arc<MockGateway>) -> AppState {
    init_tracing();
    AppState::new(gateway, CredentialStore::with_access_token(TEST_TOKEN))
}

/// Services wired to the mock gateway with no session at all.
pub fn anonymous_state(gateway: Arc<MockGateway>) -> AppState {
    init_tracing();
    AppState::new(gateway, CredentialStore::new())
}

/// Two remote courses the way the backend serves them: snake_case columns
/// with the occasional camelCase straggler, nested modules and lessons.
pub fn sample_remote_courses() -> Value {
    json!([
        {
            "id": "c1",
            "title": "Python 101",
            "description": "Learn Python",
            "difficulty": "beginner",
            "language": "python",
            "color": "#3B82F6",
            "order_index": 1,
            "is_published": true,
            "estimated_hours": 10,
            "modules": [
                {
                    "id": "m1",
                    "course_id": "c1",
                    "title": "Basics",
                    "description": "First steps",
                    "orderIndex": 1,
                    "iconEmoji": "🐍",
                    "lessons": [
                        {
                            "id": "l1",
                            "module_id": "m1",
                            "title": "Hello",
                            "lessonType": "exercise",
                            "language": "python",
                            "xpReward": 10,
                            "orderIndex": 1,
                            "content": {
                                "type": "exercise",
                                "instruction": "Print Hello World",
                                "starterCode": "",
                                "solution": "print(\"Hello World\")",
                                "testCases": [ { "expectedOutput": "Hello World" } ],
                            },
                        },
                    ],
                },
            ],
        },
        {
            "id": "c2",
            "title": "JavaScript 101",
            "description": "Learn JavaScript",
            "difficulty": "beginner",
            "language": "javascript",
            "color": "#F7DF1E",
            "order_index": 2,
            "is_published": true,
            "modules": [],
        },
    ])
}

/// A lesson row the way `get_lesson_by_id` serves one.
pub fn sample_remote_lesson(id: &str) -> Value {
    json!({
        "id": id,
        "module_id": "m1",
        "title": "Remote lesson",
        "lesson_type": "exercise",
        "language": "python",
        "xp_reward": 10,
        "order_index": 1,
        "is_locked": false,
        "content": {
            "type": "exercise",
            "instruction": "Print something",
            "starter_code": "",
            "solution": "print(\"x\")",
        },
    })
}
