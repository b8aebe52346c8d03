//! Integration tests for the per-file error policy

#[cfg(test)]
mod error_policy_tests {
    use std::fs;
    use std::process::{Command, ExitStatus};
    use tempfile::tempdir;

    fn run_pub2txt(args: &[&str]) -> Result<(ExitStatus, String, String), String> {
        let mut cmd = Command::new("cargo");
        cmd.args(["run", "--bin", "pub2txt", "--"])
            .args(args)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());

        let output = cmd
            .output()
            .map_err(|e| format!("Failed to run pub2txt: {}", e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        Ok((output.status, stdout, stderr))
    }

    // A directory occupying the target path makes the write fail for that
    // file without affecting the others.
    fn plant_write_failure(dir: &std::path::Path) {
        fs::write(dir.join("bad.pub"), "doomed").unwrap();
        fs::create_dir_all(dir.join("bad.txt")).unwrap();
    }

    #[test]
    fn test_skip_and_continue_is_the_default() {
        let dir = tempdir().unwrap();
        plant_write_failure(dir.path());
        fs::write(dir.path().join("good.pub"), "survives").unwrap();

        let (status, stdout, stderr) =
            run_pub2txt(&[dir.path().to_str().unwrap()]).unwrap();

        // The failing file is reported, the good one still converts,
        // and the failure shows up in the exit status
        assert!(!status.success());
        assert!(stderr.contains("bad"), "Should name failing file: {}", stderr);
        assert!(stdout.contains("Done."), "Run should complete: {}", stdout);
        assert_eq!(
            fs::read_to_string(dir.path().join("good.txt")).unwrap(),
            "survives"
        );
    }

    #[test]
    fn test_fail_fast_aborts_the_run() {
        let dir = tempdir().unwrap();
        plant_write_failure(dir.path());

        let (status, stdout, stderr) =
            run_pub2txt(&[dir.path().to_str().unwrap(), "--fail-fast"]).unwrap();

        assert!(!status.success());
        assert!(stderr.contains("bad"), "Should name failing file: {}", stderr);
        // Aborted before the completion message
        assert!(!stdout.contains("Done."), "Should not complete: {}", stdout);
    }

    #[test]
    fn test_source_files_survive_a_failed_run() {
        let dir = tempdir().unwrap();
        plant_write_failure(dir.path());

        let (status, _stdout, _stderr) =
            run_pub2txt(&[dir.path().to_str().unwrap()]).unwrap();

        assert!(!status.success());
        assert_eq!(
            fs::read_to_string(dir.path().join("bad.pub")).unwrap(),
            "doomed"
        );
    }
}
