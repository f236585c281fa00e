use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::gateway::{ops, CommandGateway};
use crate::models::CourseLanguage;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

lazy_static! {
    // First string literal handed to the language's print primitive. This is
    // a heuristic, not a parser: variables, expressions and multi-statement
    // programs are not understood.
    static ref PYTHON_PRINT: Regex = Regex::new(r#"print\s*\(\s*["'](.+?)["']\s*\)"#).unwrap();
    static ref CONSOLE_LOG: Regex =
        Regex::new(r#"console\.log\s*\(\s*["'](.+?)["']\s*\)"#).unwrap();
}

/// Delay between a correct answer and the success notification, so the
/// result rendering and the celebration are decoupled.
pub const SUCCESS_NOTIFICATION_DELAY: Duration = Duration::from_millis(500);

/// What running (or pretending to run) a snippet produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output: String,
    pub is_correct: bool,
}

/// Shape of the backend's `validate_code` verdict.
#[derive(Debug, Deserialize)]
struct RemoteVerdict {
    #[serde(default)]
    output: Option<String>,
    #[serde(alias = "isCorrect")]
    is_correct: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Decides whether submitted code satisfies a lesson's expected output.
///
/// Markup languages are checked locally by containment. Everything else is
/// delegated to the backend's `validate_code` operation when a session
/// exists; without one, the historical local print heuristic answers
/// instead.
pub struct ValidationService {
    gateway: Arc<dyn CommandGateway>,
    credentials: CredentialStore,
}

impl ValidationService {
    pub fn new(gateway: Arc<dyn CommandGateway>, credentials: CredentialStore) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    pub async fn validate(
        &self,
        language: CourseLanguage,
        source: &str,
        expected_output: &str,
    ) -> Result<RunOutcome> {
        if language.is_markup() {
            return Ok(check_markup(source, expected_output));
        }

        match self.credentials.access_token() {
            Some(token) => {
                self.validate_remotely(language, source, expected_output, &token)
                    .await
            }
            None => Ok(check_printed_output(language, source, expected_output)),
        }
    }

    async fn validate_remotely(
        &self,
        language: CourseLanguage,
        code: &str,
        expected_output: &str,
        token: &str,
    ) -> Result<RunOutcome> {
        let args = json!({
            "code": code,
            "language": language,
            "expectedOutput": expected_output,
            "accessToken": token,
        });

        let verdict: RemoteVerdict =
            super::invoke_decoded(self.gateway.as_ref(), ops::VALIDATE_CODE, args).await?;

        Ok(RunOutcome {
            output: verdict.error.or(verdict.output).unwrap_or_default(),
            is_correct: verdict.is_correct,
        })
    }
}

/// Markup check: the submission passes iff it contains the expected output
/// verbatim. Nothing is executed.
pub fn check_markup(source: &str, expected_output: &str) -> RunOutcome {
    RunOutcome {
        output: source.trim().to_string(),
        is_correct: source.contains(expected_output),
    }
}

/// Local print heuristic: extract the first string literal passed to the
/// language's print primitive and compare it to the expected output. A
/// submission without a recognizable print call gets the language-specific
/// error message in-band, never an `Err`.
pub fn check_printed_output(
    language: CourseLanguage,
    source: &str,
    expected_output: &str,
) -> RunOutcome {
    if language.is_markup() {
        return check_markup(source, expected_output);
    }

    let pattern: &Regex = match language {
        CourseLanguage::Python => &PYTHON_PRINT,
        CourseLanguage::Javascript | CourseLanguage::Typescript => &CONSOLE_LOG,
        CourseLanguage::Html | CourseLanguage::Css => unreachable!("markup handled above"),
    };

    match pattern.captures(source).and_then(|c| c.get(1)) {
        Some(printed) => {
            let printed = printed.as_str().to_string();
            let is_correct = printed == expected_output;
            RunOutcome {
                output: printed,
                is_correct,
            }
        }
        None => RunOutcome {
            output: no_print_message(language).to_string(),
            is_correct: false,
        },
    }
}

fn no_print_message(language: CourseLanguage) -> &'static str {
    match language {
        CourseLanguage::Python => "Error: No print statement found",
        CourseLanguage::Javascript | CourseLanguage::Typescript => {
            "Error: No console.log statement found"
        }
        CourseLanguage::Html | CourseLanguage::Css => "Error: No output found",
    }
}

/// Run `notify` after [`SUCCESS_NOTIFICATION_DELAY`]. Purely cosmetic timing
/// for the caller's celebration UI; the validation result itself is already
/// final when this is scheduled.
pub fn schedule_success_notification<F>(notify: F) -> tokio::task::JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(SUCCESS_NOTIFICATION_DELAY).await;
        notify();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn python_print_matches_expected_output() {
        let outcome = check_printed_output(
            CourseLanguage::Python,
            "print(\"Hello World\")",
            "Hello World",
        );
        assert_eq!(outcome.output, "Hello World");
        assert!(outcome.is_correct);
    }

    #[test]
    fn python_print_is_case_sensitive() {
        let outcome = check_printed_output(
            CourseLanguage::Python,
            "print(\"hello world\")",
            "Hello World",
        );
        assert_eq!(outcome.output, "hello world");
        assert!(!outcome.is_correct);
    }

    #[test]
    fn python_single_quotes_are_accepted() {
        let outcome =
            check_printed_output(CourseLanguage::Python, "print('Hello World')", "Hello World");
        assert!(outcome.is_correct);
    }

    #[test]
    fn missing_print_reports_language_specific_message() {
        let outcome = check_printed_output(CourseLanguage::Python, "x = 5", "Hello World");
        assert_eq!(outcome.output, "Error: No print statement found");
        assert!(!outcome.is_correct);

        let outcome = check_printed_output(CourseLanguage::Javascript, "let x = 5;", "Hi");
        assert_eq!(outcome.output, "Error: No console.log statement found");
        assert!(!outcome.is_correct);
    }

    #[test]
    fn javascript_uses_console_log() {
        let outcome = check_printed_output(
            CourseLanguage::Javascript,
            "console.log(\"Hello JavaScript\");",
            "Hello JavaScript",
        );
        assert!(outcome.is_correct);

        // A python-style print in a JS lesson is not a console.log
        let outcome =
            check_printed_output(CourseLanguage::Javascript, "print(\"Hello\")", "Hello");
        assert!(!outcome.is_correct);
    }

    #[test]
    fn only_the_first_print_counts() {
        let outcome = check_printed_output(
            CourseLanguage::Python,
            "print(\"first\")\nprint(\"second\")",
            "second",
        );
        assert_eq!(outcome.output, "first");
        assert!(!outcome.is_correct);
    }

    #[test]
    fn markup_passes_by_containment() {
        let outcome = check_markup(
            "<body>\n  <h1>Welcome to HTML</h1>\n</body>",
            "<h1>Welcome to HTML</h1>",
        );
        assert!(outcome.is_correct);

        let outcome = check_markup("<h2>Welcome to HTML</h2>", "<h1>Welcome to HTML</h1>");
        assert!(!outcome.is_correct);
    }

    #[tokio::test(start_paused = true)]
    async fn success_notification_fires_after_the_fixed_delay() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let handle = schedule_success_notification(move || flag.store(true, Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(SUCCESS_NOTIFICATION_DELAY).await;
        handle.await.unwrap();
        assert!(fired.load(Ordering::SeqCst));
    }
}
