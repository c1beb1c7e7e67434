//! The one-shot ask, print and save flow.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::cli::Console;
use crate::errors::ChatError;
use crate::openai::ChatClient;
use crate::persist::Recorder;

/// Where a session ended.
#[derive(Debug)]
pub enum Outcome {
    /// Blank input: no request, no file.
    Empty,
    /// The answer was printed and saved to this path.
    Persisted(PathBuf),
    /// The request failed; the message was shown and nothing was saved.
    Reported(String),
}

/// One question, one answer, one file.
pub struct Session<'a> {
    client: &'a ChatClient,
    system_prompt: String,
    recorder: Recorder,
    console: Console,
}

impl<'a> Session<'a> {
    pub fn new(
        client: &'a ChatClient,
        system_prompt: impl Into<String>,
        recorder: Recorder,
        console: Console,
    ) -> Self {
        Session {
            client,
            system_prompt: system_prompt.into(),
            recorder,
            console,
        }
    }

    /// Read one line from `input`, ask the model, write the answer to `out`
    /// and persist the exchange.
    ///
    /// A failed request is reported on `out` and yields [`Outcome::Reported`];
    /// I/O errors (reading input, writing the record) are returned.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut out: W,
    ) -> Result<Outcome, ChatError> {
        writeln!(out, "{}", self.console.banner)?;
        writeln!(out, "{}", "-".repeat(30))?;
        writeln!(out, "{}", self.console.input_prompt)?;
        out.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let user_text = line.trim();
        if user_text.is_empty() {
            writeln!(out, "❌ 未输入内容，程序结束")?;
            return Ok(Outcome::Empty);
        }

        writeln!(out, "\n{}\n", self.console.waiting)?;
        out.flush()?;

        let result = match self.client.complete(user_text, &self.system_prompt) {
            Ok(result) => result,
            Err(e) => {
                warn!("request failed, nothing saved");
                writeln!(out, "❌ 调用模型失败：{}", e)?;
                return Ok(Outcome::Reported(e.to_string()));
            }
        };

        writeln!(out, "{}\n", self.console.result_header)?;
        writeln!(out, "{}", result)?;
        writeln!(out, "\n{}", "=".repeat(23))?;

        let path = self.recorder.persist(user_text, &result)?;
        info!("session complete");
        writeln!(out, "\n{}{}", self.console.saved, path.display())?;
        Ok(Outcome::Persisted(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Profile;
    use crate::config::ClientConfig;
    use mockito::Server;
    use std::fs;
    use std::io::Cursor;

    fn client_for(server: &Server) -> ChatClient {
        let mut config = ClientConfig::new("test_key");
        config.base_url = format!("{}/v1", server.url());
        ChatClient::new(config).unwrap()
    }

    fn run(client: &ChatClient, dir: &std::path::Path, input: &str) -> (Outcome, String) {
        let profile = Profile::Analysis;
        let session = Session::new(
            client,
            profile.system_prompt(),
            Recorder::new(dir, profile.template()),
            profile.console(),
        );
        let mut out = Vec::new();
        let outcome = session.run(Cursor::new(input), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn blank_input_skips_request_and_file() {
        let mut server = Server::new();
        let m = server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create();
        let dir = tempfile::tempdir().unwrap();
        let client = client_for(&server);

        for input in ["", "\n", "   \t  \n"] {
            let (outcome, printed) = run(&client, dir.path(), input);
            assert!(matches!(outcome, Outcome::Empty));
            assert!(printed.contains("未输入内容"));
        }

        m.assert();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn success_prints_and_persists_trimmed_input() {
        let mut server = Server::new();
        let m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"【一、核心玩法与机制理解】\n- 收集"}}]}"#)
            .create();
        let dir = tempfile::tempdir().unwrap();

        let (outcome, printed) = run(&client_for(&server), dir.path(), "  三消加养成  \n");

        m.assert();
        let Outcome::Persisted(path) = outcome else {
            panic!("expected Persisted, got {outcome:?}");
        };
        assert!(path.to_string_lossy().ends_with("_game_analysis.md"));
        assert!(printed.contains("【一、核心玩法与机制理解】\n- 收集"));
        assert!(printed.contains(&path.display().to_string()));

        let doc = fs::read_to_string(&path).unwrap();
        assert!(doc.contains("## 研究对象\n三消加养成\n"));
        assert!(doc.contains("【一、核心玩法与机制理解】\n- 收集"));
    }

    #[test]
    fn unauthorized_is_reported_without_file() {
        let mut server = Server::new();
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Invalid Authentication"}}"#)
            .create();
        let dir = tempfile::tempdir().unwrap();

        let (outcome, printed) = run(&client_for(&server), dir.path(), "hello\n");

        assert!(matches!(outcome, Outcome::Reported(ref msg) if msg.contains("401")));
        assert!(printed.contains("调用模型失败"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn unwritable_output_dir_propagates_io_error() {
        let mut server = Server::new();
        let _m = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
            .create();
        let dir = tempfile::tempdir().unwrap();
        let client = client_for(&server);
        let profile = Profile::Chat;
        let session = Session::new(
            &client,
            profile.system_prompt(),
            Recorder::new(dir.path().join("missing"), profile.template()),
            profile.console(),
        );

        let err = session.run(Cursor::new("hello\n"), Vec::new()).unwrap_err();
        assert!(matches!(err, ChatError::Io(_)));
    }
}
