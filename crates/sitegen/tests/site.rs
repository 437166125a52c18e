use std::fs;
use std::path::Path;

use sitegen::{
    build_site, copy_static, generate_page, generate_pages_recursive, AssetEvent, SiteError,
    SiteOptions,
};

const TEMPLATE: &str = "<html><head><title>{{ Title }}</title><link href=\"/index.css\"></head><body>{{ Content }}</body></html>";

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn generate_single_page() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("content/index.md"), "# Tolkien Fan Club\n\nSee [blog](/blog).");
    write(&root.join("template.html"), TEMPLATE);

    let public = root.join("public");
    let dest = public.join("index.html");
    generate_page(
        &root.join("content/index.md"),
        &root.join("template.html"),
        &dest,
        &public,
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(dest).unwrap(),
        "<html><head><title>Tolkien Fan Club</title><link href=\"index.css\"></head><body><div><h1>Tolkien Fan Club</h1><p>See <a href=\"blog\">blog</a>.</p></div></body></html>"
    );
}

#[test]
fn generate_pages_mirrors_content_tree() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("content/index.md"), "# Home");
    write(&root.join("content/blog/glorfindel/index.md"), "# Glorfindel\n\n[home](/)");
    write(&root.join("content/notes.txt"), "not markdown");
    write(&root.join("template.html"), TEMPLATE);

    let public = root.join("public");
    let report =
        generate_pages_recursive(&root.join("content"), &root.join("template.html"), &public)
            .unwrap();

    assert!(report.is_success());
    assert_eq!(
        report.generated,
        vec![
            public.join("blog/glorfindel/index.html"),
            public.join("index.html"),
        ]
    );
    assert!(!public.join("notes.txt").exists());
    assert!(!public.join("notes.html").exists());

    let nested = fs::read_to_string(public.join("blog/glorfindel/index.html")).unwrap();
    assert!(nested.contains("<link href=\"../../index.css\">"));
    assert!(nested.contains("<a href=\"../../\">home</a>"));
}

#[test]
fn failing_document_does_not_stop_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("content/a.md"), "no title here");
    write(&root.join("content/b.md"), "# Fine");
    write(&root.join("template.html"), TEMPLATE);

    let public = root.join("public");
    let report =
        generate_pages_recursive(&root.join("content"), &root.join("template.html"), &public)
            .unwrap();

    assert_eq!(report.generated, vec![public.join("b.html")]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].0, root.join("content/a.md"));
    assert!(matches!(report.failures[0].1, SiteError::NoTitleFound));
}

#[test]
fn missing_template_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("content/index.md"), "# Home");

    let err = generate_pages_recursive(
        &root.join("content"),
        &root.join("missing.html"),
        &root.join("public"),
    )
    .unwrap_err();

    match err {
        SiteError::Io { path, .. } => assert_eq!(path, root.join("missing.html")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn copy_static_replaces_destination() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("static/index.css"), "body {}");
    write(&root.join("static/images/cat.png"), "png");
    write(&root.join("public/stale.html"), "old");

    let mut events: Vec<AssetEvent> = Vec::new();
    copy_static(&root.join("static"), &root.join("public"), &mut events).unwrap();

    assert!(!root.join("public/stale.html").exists());
    assert_eq!(
        fs::read_to_string(root.join("public/images/cat.png")).unwrap(),
        "png"
    );
    assert_eq!(
        events,
        vec![
            AssetEvent::RemovedDir(root.join("public")),
            AssetEvent::CreatedDir(root.join("public")),
            AssetEvent::CreatedDir(root.join("public/images")),
            AssetEvent::CopiedFile {
                from: root.join("static/images/cat.png"),
                to: root.join("public/images/cat.png"),
            },
            AssetEvent::CopiedFile {
                from: root.join("static/index.css"),
                to: root.join("public/index.css"),
            },
        ]
    );
}

#[test]
fn build_site_copies_assets_and_generates_pages() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("static/index.css"), "body {}");
    write(&root.join("content/index.md"), "# Home\n\n- one\n- two");
    write(&root.join("template.html"), TEMPLATE);

    let options = SiteOptions {
        content_dir: root.join("content"),
        static_dir: root.join("static"),
        template_path: root.join("template.html"),
        output_dir: root.join("public"),
    };
    let mut events: Vec<AssetEvent> = Vec::new();
    let report = build_site(&options, &mut events).unwrap();

    assert!(report.is_success());
    assert!(root.join("public/index.css").exists());
    let page = fs::read_to_string(root.join("public/index.html")).unwrap();
    assert!(page.contains("<ul><li>one</li><li>two</li></ul>"));
}
