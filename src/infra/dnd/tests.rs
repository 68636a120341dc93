use super::linux::desktop_matches;
use super::testing::{FakeHost, FakeRunner};
use super::*;

fn controller(
    platform: Platform,
    pinned: Option<LinuxDndBackend>,
    runner: Arc<FakeRunner>,
    host: FakeHost,
) -> DndController {
    DndController::new(
        DndStrategy::for_platform(platform, pinned),
        runner,
        Arc::new(host),
    )
}

#[test]
fn platform_from_os_maps_known_targets() {
    assert_eq!(Platform::from_os("windows"), Platform::Windows);
    assert_eq!(Platform::from_os("macos"), Platform::MacOs);
    assert_eq!(Platform::from_os("linux"), Platform::Linux);
    assert_eq!(Platform::from_os("freebsd"), Platform::Other("freebsd"));
}

#[test]
fn linux_first_detected_daemon_wins_and_short_circuits() {
    let runner = Arc::new(FakeRunner::default());
    let dnd = controller(
        Platform::Linux,
        None,
        runner.clone(),
        FakeHost::new(&["makoctl", "dunstctl"], Some("GNOME")),
    );

    assert_eq!(dnd.set_do_not_disturb(true).expect("enable"), "Mako");
    assert_eq!(
        runner.calls(),
        vec![ShellCommand::new(
            "makoctl",
            ["mode", "-a", "do-not-disturb"]
        )]
    );
}

#[test]
fn linux_failed_backend_falls_through_to_next() {
    let runner = Arc::new(FakeRunner::failing(&["swaync-client"]));
    let dnd = controller(
        Platform::Linux,
        None,
        runner.clone(),
        FakeHost::new(&["swaync-client", "dunstctl"], None),
    );

    assert_eq!(dnd.set_do_not_disturb(false).expect("disable"), "Dunst");
    assert_eq!(runner.programs(), vec!["swaync-client", "dunstctl"]);
    assert_eq!(
        runner.calls()[1],
        ShellCommand::new("dunstctl", ["set-paused", "false"])
    );
}

#[test]
fn linux_falls_back_to_desktop_id_when_no_daemon_found() {
    let runner = Arc::new(FakeRunner::default());
    let dnd = controller(
        Platform::Linux,
        None,
        runner.clone(),
        FakeHost::new(&[], Some("ubuntu:GNOME")),
    );

    assert_eq!(dnd.set_do_not_disturb(true).expect("enable"), "GNOME");
    assert_eq!(
        runner.calls(),
        vec![ShellCommand::new(
            "gsettings",
            [
                "set",
                "org.gnome.desktop.notifications",
                "show-banners",
                "false"
            ]
        )]
    );
}

#[test]
fn linux_desktop_detection_is_identical_for_enable_and_disable() {
    // gsettings installed on a KDE session must not route either direction to GNOME.
    for enabled in [true, false] {
        let runner = Arc::new(FakeRunner::default());
        let dnd = controller(
            Platform::Linux,
            None,
            runner.clone(),
            FakeHost::new(&["gsettings", "qdbus"], Some("KDE")),
        );

        assert_eq!(dnd.set_do_not_disturb(enabled).expect("toggle"), "KDE");
        assert_eq!(runner.programs(), vec!["qdbus"]);
        let expected = if enabled {
            "dndManager.enabled=true"
        } else {
            "dndManager.enabled=false"
        };
        assert_eq!(runner.calls()[0].args.last().map(String::as_str), Some(expected));
    }
}

#[test]
fn linux_without_any_backend_reports_no_backend() {
    let runner = Arc::new(FakeRunner::default());
    let dnd = controller(
        Platform::Linux,
        None,
        runner.clone(),
        FakeHost::new(&["gsettings"], Some("XFCE")),
    );

    let err = dnd.set_do_not_disturb(true).expect_err("no backend");
    assert!(matches!(err, DndError::NoBackend));
    assert!(runner.calls().is_empty());
}

#[test]
fn linux_all_backends_failing_reports_no_backend() {
    let runner = Arc::new(FakeRunner::failing(&["hyprctl", "gsettings"]));
    let dnd = controller(
        Platform::Linux,
        None,
        runner.clone(),
        FakeHost::new(&["hyprctl"], Some("GNOME")),
    );

    assert!(matches!(
        dnd.set_do_not_disturb(true),
        Err(DndError::NoBackend)
    ));
    assert_eq!(runner.programs(), vec!["hyprctl", "gsettings"]);
}

#[test]
fn linux_pinned_backend_is_the_only_one_probed() {
    let runner = Arc::new(FakeRunner::default());
    let dnd = controller(
        Platform::Linux,
        Some(LinuxDndBackend::Dunst),
        runner.clone(),
        FakeHost::new(&["swaync-client", "dunstctl"], None),
    );

    assert_eq!(dnd.set_do_not_disturb(true).expect("enable"), "Dunst");
    assert_eq!(runner.programs(), vec!["dunstctl"]);
}

#[test]
fn macos_writes_preference_then_restarts_notification_center() {
    let runner = Arc::new(FakeRunner::default());
    let dnd = controller(Platform::MacOs, None, runner.clone(), FakeHost::default());

    assert_eq!(
        dnd.set_do_not_disturb(true).expect("enable"),
        "macOS Notification Center"
    );
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].program, "defaults");
    assert_eq!(calls[0].args.last().map(String::as_str), Some("true"));
    assert_eq!(calls[1], ShellCommand::new("killall", ["NotificationCenter"]));
}

#[test]
fn macos_stops_when_preference_write_fails() {
    let runner = Arc::new(FakeRunner::failing(&["defaults"]));
    let dnd = controller(Platform::MacOs, None, runner.clone(), FakeHost::default());

    assert!(matches!(
        dnd.set_do_not_disturb(false),
        Err(DndError::CommandFailed { .. })
    ));
    assert_eq!(runner.programs(), vec!["defaults"]);
}

#[test]
fn windows_issues_single_focus_assist_write() {
    let runner = Arc::new(FakeRunner::default());
    let dnd = controller(Platform::Windows, None, runner.clone(), FakeHost::default());

    dnd.set_do_not_disturb(true).expect("enable");
    dnd.set_do_not_disturb(false).expect("disable");

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.program == "powershell"));
    let enable_script = calls[0].args.last().expect("enable script");
    let disable_script = calls[1].args.last().expect("disable script");
    assert!(enable_script.contains("-Value 2"));
    assert!(enable_script.contains(WINDOWS_FOCUS_ASSIST_KEY));
    assert!(disable_script.contains("-Value 0"));
    assert!(disable_script.contains("-ErrorAction Stop"));
    assert!(!disable_script.contains("Test-Path"));
}

#[test]
fn unsupported_platform_fails_without_running_commands() {
    let runner = Arc::new(FakeRunner::default());
    let dnd = controller(
        Platform::Other("haiku"),
        None,
        runner.clone(),
        FakeHost::default(),
    );

    assert!(matches!(
        dnd.set_do_not_disturb(true),
        Err(DndError::Unsupported(os)) if os == "haiku"
    ));
    assert!(runner.calls().is_empty());
}

#[test]
fn desktop_matches_is_case_insensitive_per_component() {
    assert!(desktop_matches("ubuntu:GNOME", "GNOME"));
    assert!(desktop_matches("gnome", "GNOME"));
    assert!(desktop_matches("KDE", "KDE"));
    assert!(!desktop_matches("XFCE", "GNOME"));
    assert!(!desktop_matches("", "KDE"));
}

#[test]
fn linux_backend_serializes_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&LinuxDndBackend::SwayNc).expect("serialize"),
        "\"sway_nc\""
    );
    let parsed: LinuxDndBackend = serde_json::from_str("\"kde\"").expect("parse");
    assert_eq!(parsed, LinuxDndBackend::Kde);
}
