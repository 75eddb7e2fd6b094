use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rusqlite::Connection;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bookshop"))
}

struct Shop {
    dir: TempDir,
}

impl Shop {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
        Self { dir }
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("bookshop_database")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.arg("--db")
            .arg(self.db())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("BOOKSHOP_DB")
            .env_remove("BOOKSHOP_CONFIG")
            .env_remove("BOOKSHOP_LOG")
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .expect("run bookshop")
    }

    fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn bookshop");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait for bookshop")
    }

    fn add(&self, title: &str, author: &str, quantity: &str) -> i64 {
        let output = self.run(&["add", title, author, quantity]);
        assert!(output.status.success(), "add failed: {}", stderr(&output));
        stdout(&output)
            .lines()
            .find_map(|line| line.strip_prefix("id="))
            .expect("id line")
            .parse()
            .expect("numeric id")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn rows(db: &Path) -> Vec<(i64, String, String, i64)> {
    let conn = Connection::open(db).expect("open db");
    let mut stmt = conn
        .prepare("SELECT id, title, author, Quantity FROM book ORDER BY id")
        .expect("prepare");
    stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
    })
    .expect("query")
    .collect::<Result<Vec<_>, _>>()
    .expect("rows")
}

#[test]
fn add_then_list_prints_rows_in_id_order() {
    let shop = Shop::new();
    let hobbit = shop.add("The Hobbit", "J.R.R. Tolkien", "3");
    let dune = shop.add("Dune", "Frank Herbert", "5");
    assert!(dune > hobbit);

    let output = shop.run(&["list"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "{}\tThe Hobbit\tJ.R.R. Tolkien\t3\n{}\tDune\tFrank Herbert\t5\n",
            hobbit, dune
        )
    );
}

#[test]
fn list_json_on_empty_store() {
    let shop = Shop::new();
    let output = shop.run(&["list", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value, serde_json::json!([]));
    assert!(shop.db().exists());
}

#[test]
fn search_json_ranks_typo_match() {
    let shop = Shop::new();
    let hobbit = shop.add("The Hobbit", "J.R.R. Tolkien", "3");
    shop.add("Dune", "Frank Herbert", "5");

    let output = shop.run(&["search", "hobit", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["query"], "hobit");
    assert_eq!(value["count"], 1);
    assert_eq!(value["results"][0]["id"], hobbit);
    assert_eq!(value["results"][0]["title"], "The Hobbit");
    assert!(value["results"][0]["score"].as_u64().unwrap() >= 80);
}

#[test]
fn search_plain_prints_matches_only() {
    let shop = Shop::new();
    shop.add("The Hobbit", "J.R.R. Tolkien", "3");
    let dune = shop.add("Dune", "Frank Herbert", "5");

    let output = shop.run(&["search", "Herbert"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\tDune\tFrank Herbert\t5\n", dune));
}

#[test]
fn quantity_and_edit_update_one_field() {
    let shop = Shop::new();
    let id = shop.add("Dune", "Frank Herbet", "5");

    let output = shop.run(&["quantity", &id.to_string(), "-2"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let output = shop.run(&["edit", &id.to_string(), "--author", "Frank Herbert"]);
    assert!(output.status.success(), "{}", stderr(&output));

    assert_eq!(
        rows(&shop.db()),
        vec![(id, "Dune".to_string(), "Frank Herbert".to_string(), -2)]
    );
}

#[test]
fn quantity_for_missing_book_exits_not_found() {
    let shop = Shop::new();
    let output = shop.run(&["quantity", "42", "7"]);

    assert_eq!(output.status.code(), Some(3));
    let err = stderr(&output);
    assert!(err.contains("error=Book not found: 42"));
    assert!(err.contains("hint=Run `bookshop list`"));
}

#[test]
fn delete_without_yes_is_refused_off_terminal() {
    let shop = Shop::new();
    let id = shop.add("Dune", "Frank Herbert", "5");

    let output = shop.run(&["delete", &id.to_string()]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("hint=Pass --yes"));
    assert_eq!(rows(&shop.db()).len(), 1);
}

#[test]
fn delete_with_yes_is_idempotent() {
    let shop = Shop::new();
    let id = shop.add("Dune", "Frank Herbert", "5");

    let output = shop.run(&["delete", &id.to_string(), "--yes"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("deleted=true"));

    let output = shop.run(&["delete", &id.to_string(), "--yes"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("deleted=false"));
    assert!(rows(&shop.db()).is_empty());
}

#[test]
fn sql_looking_title_is_stored_verbatim() {
    let shop = Shop::new();
    let title = "Robert'); DROP TABLE book;--";
    shop.add(title, "Bobby", "1");

    let stored = rows(&shop.db());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].1, title);
}

#[test]
fn non_integer_quantity_is_a_usage_error() {
    let shop = Shop::new();
    let output = shop.run(&["add", "Dune", "Frank Herbert", "many"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn menu_add_and_exit_via_stdin() {
    let shop = Shop::new();
    let output = shop.run_with_input(&[], "1\nDune\nFrank Herbert\nfive\n5\n6\n\n0\n");

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Welcome to the bookshop database manager!"));
    assert!(out.contains("Please enter a number!"));
    assert!(out.contains("Dune added successfully!"));
    assert!(out.contains("Frank Herbert"));
    assert!(out.trim_end().ends_with("Exiting..."));

    let stored = rows(&shop.db());
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].3, 5);
}

#[test]
fn menu_reports_missing_book_and_keeps_going() {
    let shop = Shop::new();
    let output = shop.run_with_input(&["menu"], "2\n\n99\n1\n0\n");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Book not found: 99"));
    assert!(out.contains("Exiting..."));
}

#[test]
fn menu_ends_cleanly_when_input_closes() {
    let shop = Shop::new();
    let output = shop.run_with_input(&[], "");
    assert!(output.status.success());
    assert!(!stdout(&output).contains("Exiting..."));
}

#[test]
fn config_sets_database_path_and_threshold() {
    let shop = Shop::new();
    let db = shop.dir.path().join("from_config.db");
    let config_dir = shop.config_home().join("bookshop");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(
        config_dir.join("config.toml"),
        format!(
            "[store]\npath = \"{}\"\n\n[search]\nthreshold = 100\n",
            db.display()
        ),
    )
    .expect("write config");

    let output = Command::new(bin())
        .args(["add", "Dune", "Frank Herbert", "5"])
        .env("XDG_CONFIG_HOME", shop.config_home())
        .env_remove("BOOKSHOP_DB")
        .env_remove("BOOKSHOP_CONFIG")
        .current_dir(shop.dir.path())
        .output()
        .expect("run bookshop");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(rows(&db).len(), 1);

    let output = Command::new(bin())
        .args(["search", "dun", "--json"])
        .env("XDG_CONFIG_HOME", shop.config_home())
        .env_remove("BOOKSHOP_DB")
        .env_remove("BOOKSHOP_CONFIG")
        .current_dir(shop.dir.path())
        .output()
        .expect("run bookshop");
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["count"], 0);
}

#[test]
fn missing_explicit_config_exits_not_found() {
    let shop = Shop::new();
    let output = shop.run(&["--config", "/nonexistent/bookshop.toml", "list"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("error=Config not found"));
}

#[test]
fn completions_mention_subcommands() {
    let shop = Shop::new();
    let output = shop.run(&["completions", "bash"]);
    assert!(output.status.success());
    let script = stdout(&output);
    assert!(script.contains("bookshop"));
    assert!(script.contains("quantity"));
}
