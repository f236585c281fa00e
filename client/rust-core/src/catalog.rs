//! Built-in course catalog, served when no session exists or the backend is
//! unreachable. Hand-authored, deterministic, and never mutated; the data
//! lives in the binary, so these accessors are pure and synchronous.

use crate::models::content::{LessonContent, QuizOption, TestCase};
use crate::models::{Course, CourseLanguage, Difficulty, Lesson, Module};
use std::sync::OnceLock;

static BUILTIN: OnceLock<Vec<Course>> = OnceLock::new();

/// All built-in courses, in catalog order. Stable across calls within a
/// process.
pub fn builtin_courses() -> &'static [Course] {
    BUILTIN.get_or_init(build_catalog)
}

/// Find a lesson by id across every built-in course and module.
pub fn find_lesson(lesson_id: &str) -> Option<&'static Lesson> {
    builtin_courses()
        .iter()
        .flat_map(|course| course.modules.iter())
        .flat_map(|module| module.lessons.iter())
        .find(|lesson| lesson.id == lesson_id)
}

/// All lessons of one built-in course, flattened in module order.
pub fn course_lessons(course_id: &str) -> Vec<&'static Lesson> {
    builtin_courses()
        .iter()
        .find(|course| course.id == course_id)
        .map(|course| {
            course
                .modules_in_order()
                .into_iter()
                .flat_map(|module| module.lessons_in_order())
                .collect()
        })
        .unwrap_or_default()
}

fn catalog_lesson(
    id: &str,
    module_id: &str,
    title: &str,
    description: Option<&str>,
    language: CourseLanguage,
    xp_reward: u32,
    order_index: i32,
    estimated_minutes: Option<i32>,
    content: LessonContent,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        module_id: module_id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        lesson_type: content.kind(),
        content,
        language,
        xp_reward,
        order_index,
        is_locked: false,
        estimated_minutes,
    }
}

fn build_catalog() -> Vec<Course> {
    vec![python_course(), javascript_course(), html_course()]
}

fn python_course() -> Course {
    let hello_world = catalog_lesson(
        "py-001",
        "mod-py-001",
        "Your first Python program",
        Some("Learn to print text to the console"),
        CourseLanguage::Python,
        10,
        1,
        Some(5),
        LessonContent::Exercise {
            instruction: "Write code that prints the text: Hello World".to_string(),
            starter_code: "# Write code that prints \"Hello World\"\nprint(\"Hello World\")"
                .to_string(),
            solution: "print(\"Hello World\")".to_string(),
            hint: Some("Use the print() function and put the text in quotes".to_string()),
            example_code: None,
            example_description: None,
            test_cases: vec![TestCase {
                input: None,
                expected_output: "Hello World".to_string(),
                description: Some("The program should print exactly: Hello World".to_string()),
            }],
        },
    );

    let variables = catalog_lesson(
        "py-002",
        "mod-py-001",
        "Variables in Python",
        Some("Learn the basics of variables"),
        CourseLanguage::Python,
        15,
        2,
        Some(8),
        LessonContent::Exercise {
            instruction:
                "Create a variable called 'name' with the value 'Python' and print it with print()"
                    .to_string(),
            starter_code: "# Create the variable name and print it\n".to_string(),
            solution: "name = \"Python\"\nprint(name)".to_string(),
            hint: Some("Remember: variable_name = value, then print(variable_name)".to_string()),
            example_code: None,
            example_description: None,
            test_cases: vec![TestCase {
                input: None,
                expected_output: "Python".to_string(),
                description: Some("The program should print: Python".to_string()),
            }],
        },
    );

    let basics_quiz = catalog_lesson(
        "py-003",
        "mod-py-001",
        "Quiz: Python basics",
        Some("Check what you have learned"),
        CourseLanguage::Python,
        10,
        3,
        Some(3),
        LessonContent::Quiz {
            question: "Which function prints text to the console?".to_string(),
            options: vec![
                QuizOption {
                    text: "console.log()".to_string(),
                    is_correct: false,
                    explanation: Some("That one belongs to JavaScript!".to_string()),
                },
                QuizOption {
                    text: "print()".to_string(),
                    is_correct: true,
                    explanation: Some("Exactly! print() is Python's basic output function.".to_string()),
                },
                QuizOption {
                    text: "echo()".to_string(),
                    is_correct: false,
                    explanation: Some("That is a bash/PHP command.".to_string()),
                },
                QuizOption {
                    text: "printf()".to_string(),
                    is_correct: false,
                    explanation: Some("That is a C function.".to_string()),
                },
            ],
            explanation: Some(
                "In Python we use the print() function to write text to the console.".to_string(),
            ),
        },
    );

    let loops = catalog_lesson(
        "py-004",
        "mod-py-001",
        "Loops in Python",
        None,
        CourseLanguage::Python,
        20,
        4,
        Some(15),
        LessonContent::Exercise {
            instruction:
                "The for loop iterates over the elements of a sequence. The range() function \
                 produces a sequence of integers."
                    .to_string(),
            starter_code: "# Your code\n".to_string(),
            solution: "for i in range(5):\n    print(i)".to_string(),
            hint: None,
            example_code: None,
            example_description: None,
            test_cases: vec![],
        },
    );

    Course {
        id: "course-python".to_string(),
        title: "Python for beginners: step by step".to_string(),
        description: "Learn programming from scratch".to_string(),
        difficulty: Difficulty::Beginner,
        language: "python".to_string(),
        modules: vec![Module {
            id: "mod-py-001".to_string(),
            course_id: "course-python".to_string(),
            title: "Python basics".to_string(),
            description: "Learn the fundamentals of programming in Python".to_string(),
            lessons: vec![hello_world, variables, basics_quiz, loops],
            order_index: 1,
            icon_emoji: Some("🐍".to_string()),
        }],
        color: "#3776AB".to_string(),
        order_index: 1,
        is_published: true,
        estimated_hours: Some(10),
        icon_url: None,
    }
}

fn javascript_course() -> Course {
    let console_log = catalog_lesson(
        "js-001",
        "mod-js-001",
        "console.log in JavaScript",
        Some("Print your first message"),
        CourseLanguage::Javascript,
        10,
        1,
        Some(5),
        LessonContent::Exercise {
            instruction: "Use console.log() to print the text: \"Hello JavaScript\"".to_string(),
            starter_code: "// Print \"Hello JavaScript\"\n".to_string(),
            solution: "console.log(\"Hello JavaScript\");".to_string(),
            hint: None,
            example_code: None,
            example_description: None,
            test_cases: vec![TestCase {
                input: None,
                expected_output: "Hello JavaScript".to_string(),
                description: Some("The program should print: Hello JavaScript".to_string()),
            }],
        },
    );

    let let_and_const = catalog_lesson(
        "js-002",
        "mod-js-001",
        "Variables: let and const",
        Some("Learn to declare variables"),
        CourseLanguage::Javascript,
        15,
        2,
        Some(8),
        LessonContent::Exercise {
            instruction:
                "Create a constant 'greeting' with the value 'Hi there!' and print it to the console"
                    .to_string(),
            starter_code: "// Create the constant greeting and print it\n".to_string(),
            solution: "const greeting = \"Hi there!\";\nconsole.log(greeting);".to_string(),
            hint: Some("Use const for a fixed value, then console.log()".to_string()),
            example_code: None,
            example_description: None,
            test_cases: vec![TestCase {
                input: None,
                expected_output: "Hi there!".to_string(),
                description: Some("The program should print: Hi there!".to_string()),
            }],
        },
    );

    Course {
        id: "course-javascript".to_string(),
        title: "JavaScript: programming fundamentals".to_string(),
        description: "Meet the language of the web".to_string(),
        difficulty: Difficulty::Beginner,
        language: "javascript".to_string(),
        modules: vec![Module {
            id: "mod-js-001".to_string(),
            course_id: "course-javascript".to_string(),
            title: "JavaScript basics".to_string(),
            description: "First steps in JavaScript".to_string(),
            lessons: vec![console_log, let_and_const],
            order_index: 1,
            icon_emoji: Some("📜".to_string()),
        }],
        color: "#F7DF1E".to_string(),
        order_index: 2,
        is_published: true,
        estimated_hours: Some(12),
        icon_url: None,
    }
}

fn html_course() -> Course {
    let first_tag = catalog_lesson(
        "html-001",
        "mod-html-001",
        "Your first HTML tag",
        Some("Learn to create headings"),
        CourseLanguage::Html,
        10,
        1,
        Some(5),
        LessonContent::Exercise {
            instruction: "Create an h1 heading with the text: Welcome to HTML".to_string(),
            starter_code: "<!-- Create an h1 heading -->\n".to_string(),
            solution: "<h1>Welcome to HTML</h1>".to_string(),
            hint: Some("The h1 tag looks like: <h1>your text</h1>".to_string()),
            example_code: None,
            example_description: None,
            test_cases: vec![TestCase {
                input: None,
                expected_output: "<h1>Welcome to HTML</h1>".to_string(),
                description: Some("The heading should contain the text: Welcome to HTML".to_string()),
            }],
        },
    );

    Course {
        id: "course-html".to_string(),
        title: "HTML & CSS for beginners".to_string(),
        description: "Build beautiful web pages".to_string(),
        difficulty: Difficulty::Beginner,
        language: "html".to_string(),
        modules: vec![Module {
            id: "mod-html-001".to_string(),
            course_id: "course-html".to_string(),
            title: "Introduction to HTML".to_string(),
            description: "Create web pages".to_string(),
            lessons: vec![first_tag],
            order_index: 1,
            icon_emoji: Some("🌐".to_string()),
        }],
        color: "#E34F26".to_string(),
        order_index: 3,
        is_published: true,
        estimated_hours: Some(8),
        icon_url: None,
    }
}
