//! Download and unpack a recipe archive on the target.

use crate::error::Result;
use crate::remote::env::join_path;
use crate::remote::RemoteEnv;
use crate::shell::quote;

use super::archive::{file_name_from_url, ArchiveKind};

/// Download `url` into `work_dir`, unpack it there, and return the path of
/// the unpacked directory.
///
/// An archive already present in `work_dir` is reused. Downloads go to a
/// `.part` file first so an interrupted transfer never looks complete.
pub fn fetch_and_unpack(
    env: &RemoteEnv,
    work_dir: &str,
    url: &str,
    unpack_dir: Option<&str>,
) -> Result<String> {
    let file = file_name_from_url(url)?;
    let kind = ArchiveKind::detect(file)?;
    let dir_name = match unpack_dir {
        Some(dir) => dir,
        None => ArchiveKind::stem(file)?,
    };

    env.run(&format!("mkdir -p {}", quote(work_dir)))?;

    let part = format!("{}.part", file);
    env.run_in(
        work_dir,
        &format!(
            "test -f {file} || {{ wget --no-check-certificate -q -O {part} {url} && mv {part} {file}; }}",
            file = quote(file),
            part = quote(&part),
            url = quote(url),
        ),
    )?;
    env.run_in(work_dir, &kind.extract_command(file))?;

    let unpacked = join_path(work_dir, dir_name);
    tracing::debug!("unpacked {} into {}", file, unpacked);
    Ok(unpacked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstallPaths;
    use crate::error::RecipeError;
    use crate::remote::MockSession;

    fn env_for(host: &MockSession) -> RemoteEnv {
        RemoteEnv::new(Box::new(host.clone()), InstallPaths::default(), true)
    }

    #[test]
    fn downloads_then_extracts() {
        let host = MockSession::new();
        let dir = fetch_and_unpack(
            &env_for(&host),
            "/tmp/biorecipe/emboss-6.3.1",
            "ftp://emboss.open-bio.org/pub/EMBOSS/EMBOSS-6.3.1.tar.gz",
            None,
        )
        .unwrap();

        assert_eq!(dir, "/tmp/biorecipe/emboss-6.3.1/EMBOSS-6.3.1");
        let commands = host.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], "mkdir -p /tmp/biorecipe/emboss-6.3.1");
        assert!(commands[1].contains("test -f EMBOSS-6.3.1.tar.gz ||"));
        assert!(commands[1].contains(
            "wget --no-check-certificate -q -O EMBOSS-6.3.1.tar.gz.part ftp://emboss.open-bio.org/pub/EMBOSS/EMBOSS-6.3.1.tar.gz"
        ));
        assert_eq!(
            commands[2],
            "cd /tmp/biorecipe/emboss-6.3.1 && tar -xzpf EMBOSS-6.3.1.tar.gz"
        );
    }

    #[test]
    fn unpack_dir_override_wins() {
        let host = MockSession::new();
        let dir = fetch_and_unpack(
            &env_for(&host),
            "/tmp/w",
            "http://x.org/tool-1.0.zip",
            Some("Tool 1.0"),
        )
        .unwrap();
        assert_eq!(dir, "/tmp/w/Tool 1.0");
        assert!(host.commands()[2].ends_with("unzip -o -q tool-1.0.zip"));
    }

    #[test]
    fn unsupported_archive_issues_no_commands() {
        let host = MockSession::new();
        let err = fetch_and_unpack(&env_for(&host), "/tmp/w", "http://x.org/tool.rar", None)
            .unwrap_err();
        assert!(matches!(err, RecipeError::UnsupportedArchive { .. }));
        assert!(host.commands().is_empty());
    }

    #[test]
    fn failed_download_aborts_before_extract() {
        let host = MockSession::new();
        host.fail_on("wget", 8, "server error");
        let err = fetch_and_unpack(&env_for(&host), "/tmp/w", "http://x.org/a.tar.gz", None)
            .unwrap_err();
        assert!(matches!(err, RecipeError::CommandFailed { code: Some(8), .. }));
        assert!(host.commands_matching("tar -x").is_empty());
    }
}
