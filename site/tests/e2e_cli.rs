//! End-to-end CLI tests for pd-site

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn pd_site() -> Command {
    cargo_bin_cmd!("pd-site")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        pd_site()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("assets"))
            .stdout(predicate::str::contains("outline"));
    }

    #[test]
    fn shows_version() {
        pd_site()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod render {
    use super::*;

    #[test]
    fn writes_document_to_file() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist").join("index.html");

        pd_site()
            .current_dir(temp.path())
            .args(["render", "--year", "2030", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("rendered page");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("© 2030 Positive Development"));
    }

    #[test]
    fn writes_to_stdout_with_dash() {
        let temp = TempDir::new().expect("temp dir");
        pd_site()
            .current_dir(temp.path())
            .args(["render", "--out", "-"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Why Lake Malawi?"));
    }

    #[test]
    fn picks_up_site_toml() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("site.toml"),
            "[contact]\nemail = \"team@pd.mw\"\n",
        )
        .expect("write config");

        pd_site()
            .current_dir(temp.path())
            .args(["render", "--out", "-"])
            .assert()
            .success()
            .stdout(predicate::str::contains("mailto:team@pd.mw"));
    }

    #[test]
    fn rejects_malformed_config() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("broken.toml");
        std::fs::write(&config, "title = [").expect("write config");

        pd_site()
            .current_dir(temp.path())
            .args(["render", "--out", "-", "--config"])
            .arg(&config)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load site config"));
    }
}

mod assets {
    use super::*;

    #[test]
    fn lists_missing_assets() {
        let temp = TempDir::new().expect("temp dir");
        pd_site()
            .current_dir(temp.path())
            .args(["assets", "--public"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("missing  /images/logo-gt.png"));
    }

    #[test]
    fn remote_assets_are_reported_as_skipped() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("site.toml"),
            "[assets]\nimages = \"https://cdn.example.org/img\"\nvideos = \"https://cdn.example.org/vid\"\n",
        )
        .expect("write config");

        pd_site()
            .current_dir(temp.path())
            .args(["assets", "--strict", "--public"])
            .arg(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("skipped  https://cdn.example.org/img/logo-gt.png"))
            .stdout(predicate::str::contains("ok ").not());
    }

    #[test]
    fn strict_fails_when_assets_missing() {
        let temp = TempDir::new().expect("temp dir");
        pd_site()
            .current_dir(temp.path())
            .args(["assets", "--strict", "--public"])
            .arg(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected asset(s) missing"));
    }
}

mod outline {
    use super::*;

    #[test]
    fn prints_json_content_model() {
        let temp = TempDir::new().expect("temp dir");
        let output = pd_site()
            .current_dir(temp.path())
            .arg("outline")
            .output()
            .expect("run outline");
        assert!(output.status.success());

        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("outline is json");
        assert_eq!(json["stats"][0]["value"], "1,000+");
        assert_eq!(json["partners"].as_array().map(Vec::len), Some(5));
    }
}
