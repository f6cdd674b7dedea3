mod common;

use common::TestEnv;

#[test]
fn test_new_server_only() {
    let env = TestEnv::new();
    let result = env.run(&["--mode", "new", "--folder", ".", "--templates", "server"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read("server.lua"), "-- server.lua");
    assert_eq!(
        env.read("meta.xml"),
        "<meta>\n    <script src=\"server.lua\" type=\"server\" />\n</meta>"
    );
    assert!(!env.exists("client.lua"));
    assert!(result.stdout.contains("Files successfully created!"));
}

#[test]
fn test_new_all_templates_fixed_manifest_order() {
    let env = TestEnv::new();
    let result = env.run(&[
        "--mode",
        "new",
        "--folder",
        ".",
        "--templates",
        "utils,shared,server,client",
        "--no-zoom",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    insta::assert_snapshot!(env.read("meta.xml"), @r#"
<meta>
    <script src="client.lua" type="client" cache="false" />
    <script src="server.lua" type="server" />
    <script src="shared.lua" type="shared" cache="false" />
    <script src="utils.lua" type="shared" cache="false" />
</meta>
"#);
    assert_eq!(env.read("client.lua"), "-- client.lua");
    assert_eq!(env.read("utils.lua"), "-- utils.lua");
}

#[test]
fn test_new_client_with_zoom() {
    let env = TestEnv::new();
    let result = env.run(&["-m", "new", "-f", ".", "-t", "client.lua", "--zoom"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let client = env.read("client.lua");
    assert!(client.starts_with("local sx, sy = guiGetScreenSize()\n"));
    assert!(client.contains(
        "\tdxDrawRectangle(sx/2 - 200/zoom, sy/2 - 200/zoom, 400/zoom, 400/zoom, tocolor(0, 0, 0, 200))"
    ));
    assert!(client.ends_with("addEventHandler('onClientRender', root, render)"));
}

#[test]
fn test_new_overwrites_existing_files() {
    let env = TestEnv::new();
    env.write("shared.lua", "print('keep me?')");
    env.write("meta.xml", "<meta></meta>");

    let result = env.run(&["--mode", "new", "--folder", ".", "--templates", "shared"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.read("shared.lua"), "-- shared.lua");
    assert!(env.read("meta.xml").contains("shared.lua"));
}

#[test]
fn test_new_into_missing_folder_fails() {
    let env = TestEnv::new();
    let result = env.run(&[
        "--mode",
        "new",
        "--folder",
        "does-not-exist",
        "--templates",
        "server",
    ]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("folder not found"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_new_rejects_unknown_template() {
    let env = TestEnv::new();
    let result = env.run(&["--mode", "new", "--folder", ".", "--templates", "gui"]);

    assert!(!result.success);
    assert!(result.stderr.contains("gui"), "stderr:\n{}", result.stderr);
    assert!(!env.exists("meta.xml"));
}

#[test]
fn test_new_lists_written_files() {
    let env = TestEnv::new();
    let result = env.run(&[
        "--mode",
        "new",
        "--folder",
        ".",
        "--templates",
        "client,shared",
        "--no-zoom",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("client.lua"));
    assert!(result.stdout.contains("shared.lua"));
    assert!(result.stdout.contains("meta.xml"));
    assert!(result.stdout.contains("2 entries (2 scripts)"));
}
