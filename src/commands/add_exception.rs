//! The `add-exception` task: generate an exception class.
//!
//! Exceptions always land under `src/exceptions/` and carry a default
//! message plus a numeric code. Double quotes in the message are escaped
//! so the generated string literal stays valid.

use super::write_artifact;
use crate::console::{Console, Input};
use crate::context::TaskContext;
use crate::error::Result;
use crate::filename::filename_stem;
use crate::manifest::Manifest;
use crate::permissions::{check_permissions, Permission};
use crate::props::{ExceptionInfo, ExceptionProps, Feature, Pkg};
use crate::scaffold::templates;
use regex::Regex;
use std::sync::LazyLock;

const PERMISSIONS: &[Permission] = &[Permission::Read, Permission::Write];

/// PascalCase, letters only, ending in `Exception`.
static EXCEPTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z]*Exception$").expect("valid regex"));

/// Decimal digits only.
static EXCEPTION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

pub fn run<I: Input>(console: &mut Console<I>, ctx: &TaskContext) -> Result<()> {
    let manifest = Manifest::require(&ctx.root)?;
    console.describe("Add an exception to the package.");
    check_permissions(console, PERMISSIONS)?;

    console.describe(
        "An exception name must be PascalCase, contain only letters, and end in 'Exception'. (e.g. 'MyCustomException')",
    );
    let name = console.prompt_matching("Exception name", &EXCEPTION_NAME, "exception name")?;
    let description =
        console.prompt_non_empty("Exception description", "exception description")?;
    let message = console.prompt_non_empty("Default exception message", "exception message")?;
    let code = console.prompt_matching(
        "Exception code (decimal)",
        &EXCEPTION_CODE,
        "exception code",
    )?;

    let props = ExceptionProps::new(
        Pkg::from_manifest(&manifest),
        Feature {
            name: name.clone(),
            r#type: "exception".to_string(),
            description,
        },
        ExceptionInfo {
            message: message.replace('"', "\\\""),
            code,
        },
    );
    let bag = props.bag()?;

    write_artifact(
        console,
        ctx,
        &ctx.root.join("src").join("exceptions"),
        &filename_stem(&name),
        &name,
        &templates::src_exceptions_exception().render(&bag),
        &templates::exceptions_mod_entry().render(&bag),
        &templates::tests_feature().render(&bag),
        &templates::tests_fixture().render(&bag),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use crate::console::ScriptedInput;
    use crate::exit_codes;
    use crate::test_support::create_test_repo_with_remote;
    use tempfile::TempDir;

    fn console(responses: &[&str]) -> Console<ScriptedInput> {
        Console::new("EXC", 0, ScriptedInput::new(responses.iter().copied()))
    }

    fn initialized_repo() -> (TempDir, TaskContext) {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        init::run(
            &mut Console::new(
                "INIT",
                0,
                ScriptedInput::new(["y", "widget", "A widget package", "", "n", "n"]),
            ),
            &ctx,
        )
        .unwrap();
        (temp_dir, ctx)
    }

    #[test]
    fn add_exception_writes_all_artifacts() {
        let (_temp_dir, ctx) = initialized_repo();
        // permissions, name, description, message, code
        let mut console = console(&[
            "y",
            "MyCustomException",
            "Raised when the widget misbehaves.",
            "The widget misbehaved.",
            "42",
        ]);

        run(&mut console, &ctx).unwrap();

        let exception =
            std::fs::read_to_string(ctx.root.join("src/exceptions/my_custom_exception.ts"))
                .unwrap();
        assert!(exception.contains("export class MyCustomException extends Exception {"));
        assert!(exception.contains("const DEFAULT_MESSAGE = \"The widget misbehaved.\";"));
        assert!(exception.contains("public code: number = 42;"));

        let index = std::fs::read_to_string(ctx.root.join("src/exceptions/mod.ts")).unwrap();
        assert!(index.contains("export * from \"./my_custom_exception.ts\";"));

        assert!(ctx.root.join("tests/my_custom_exception.test.ts").is_file());
        assert!(ctx
            .root
            .join("tests/fixtures/my_custom_exception.fixture.ts")
            .is_file());
    }

    #[test]
    fn quotes_in_the_message_are_escaped() {
        let (_temp_dir, ctx) = initialized_repo();
        let mut console = console(&[
            "y",
            "QuoteException",
            "Raised on quoting.",
            "The \"thing\" broke.",
            "7",
        ]);

        run(&mut console, &ctx).unwrap();

        let exception =
            std::fs::read_to_string(ctx.root.join("src/exceptions/quote_exception.ts")).unwrap();
        assert!(exception.contains(r#"const DEFAULT_MESSAGE = "The \"thing\" broke.";"#));
    }

    #[test]
    fn name_must_end_in_exception() {
        let (_temp_dir, ctx) = initialized_repo();
        // Two rejected names, then a valid one.
        let mut console = console(&[
            "y",
            "MyCustomError",
            "myException",
            "ParserException",
            "Raised on parse failures.",
            "Parsing failed.",
            "100",
        ]);

        run(&mut console, &ctx).unwrap();

        assert!(ctx.root.join("src/exceptions/parser_exception.ts").is_file());
    }

    #[test]
    fn code_must_be_decimal_digits() {
        let (_temp_dir, ctx) = initialized_repo();
        let mut console = console(&[
            "y",
            "CodeException",
            "Raised with a code.",
            "Something failed.",
            "0x2A",
            "-1",
            "42",
        ]);

        run(&mut console, &ctx).unwrap();

        let exception =
            std::fs::read_to_string(ctx.root.join("src/exceptions/code_exception.ts")).unwrap();
        assert!(exception.contains("public code: number = 42;"));
    }

    #[test]
    fn missing_manifest_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = TaskContext::at(temp_dir.path(), false);
        let mut console = console(&["y", "MyCustomException", "Desc.", "Msg.", "1"]);

        let err = run(&mut console, &ctx).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn declined_overwrite_aborts_with_exit_code_12() {
        let (_temp_dir, ctx) = initialized_repo();
        run(
            &mut console(&["y", "DupeException", "First.", "First message.", "1"]),
            &ctx,
        )
        .unwrap();

        let err = run(
            &mut console(&["y", "DupeException", "Second.", "Second message.", "2", "n"]),
            &ctx,
        )
        .unwrap_err();

        assert_eq!(err.exit_code(), exit_codes::DECLINED);
    }
}
