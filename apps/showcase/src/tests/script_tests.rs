use super::*;

#[test]
fn parses_every_command() {
    let script = Script::parse(
        "# tour\n\
         goto content\n\
         \n\
         click Switch to Page B\n\
         tap 12.5 40\n\
         wait 250\n\
         snapshot\n\
         back\n",
    )
    .expect("valid script");

    let commands: Vec<&Command> = script.lines().iter().map(|line| &line.command).collect();
    assert_eq!(
        commands,
        vec![
            &Command::Goto(ScreenId::AnimatedContent),
            &Command::Click("Switch to Page B".to_string()),
            &Command::Tap(Point::new(12.5, 40.0)),
            &Command::Wait(250),
            &Command::Snapshot,
            &Command::Back,
        ]
    );
    assert_eq!(script.lines()[0].line, 2, "line numbers count comments");
}

#[test]
fn reports_line_and_kind() {
    let err = Script::parse("back\njump 3").expect_err("unknown command");
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, ScriptErrorKind::UnknownCommand("jump".to_string()));
    assert_eq!(err.to_string(), "line 2: unknown command 'jump'");

    let err = Script::parse("tap 10").expect_err("missing y");
    assert_eq!(err.kind, ScriptErrorKind::MissingArgument("y"));

    let err = Script::parse("wait soon").expect_err("bad millis");
    assert_eq!(
        err.kind,
        ScriptErrorKind::InvalidArgument {
            name: "millis",
            value: "soon".to_string()
        }
    );

    let err = Script::parse("goto settings").expect_err("unknown screen");
    assert_eq!(err.kind, ScriptErrorKind::UnknownScreen("settings".to_string()));

    let err = Script::parse("click").expect_err("missing label");
    assert_eq!(err.kind, ScriptErrorKind::MissingArgument("label"));
}

#[test]
fn builtin_walkthrough_parses() {
    let script = Script::walkthrough().expect("walkthrough parses");
    assert!(!script.is_empty());
    assert!(script
        .lines()
        .iter()
        .any(|line| line.command == Command::Goto(ScreenId::Gesture)));
}

#[test]
fn commands_display_in_script_syntax() {
    for source in ["goto value1", "back", "click Tap Me", "wait 40", "snapshot"] {
        let script = Script::parse(source).expect("valid");
        assert_eq!(script.lines()[0].command.to_string(), source);
    }
}
