use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    Command::cargo_bin("yt-transcript")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unresolvable_input_reports_error_on_stdout() {
    Command::cargo_bin("yt-transcript")
        .unwrap()
        .arg("not-a-valid-url")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Error: Could not extract video ID from: not-a-valid-url",
        ));
}

#[test]
fn disabled_transcripts_report_on_stderr_with_video_id() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/watch").query_param("v", "dQw4w9WgXcQ");
        then.status(200)
            .body("<html><body>watch page without caption data</body></html>");
    });

    Command::cargo_bin("yt-transcript")
        .unwrap()
        .env("YT_TRANSCRIPT_BASE_URL", server.base_url())
        .arg("dQw4w9WgXcQ")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Transcripts are disabled for video: dQw4w9WgXcQ",
        ));
}

#[test]
fn timestamps_flag_accepted_after_positional() {
    // Still fails to resolve, but proves flag placement is accepted
    Command::cargo_bin("yt-transcript")
        .unwrap()
        .args(["not-a-valid-url", "--timestamps"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("not-a-valid-url"));
}
