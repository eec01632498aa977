//! Elementary stream extraction.

use super::run_tool;
use crate::tools::MPLAYER;
use crate::Result;
use std::path::Path;
use std::process::Command;

/// Dump the video elementary stream of `input` to `stream` with mplayer.
///
/// Only the video track is written; audio is dropped.
pub fn extract_video_stream(mplayer: &Path, input: &Path, stream: &Path) -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing::info!("Extracting video stream {:?} -> {:?}", input, stream);

    let mut cmd = Command::new(mplayer);
    cmd.arg("-dumpvideo").arg("-dumpfile").arg(stream).arg(input);

    run_tool(MPLAYER, &mut cmd, stream)?;
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_support::script;
    use crate::Error;

    #[test]
    fn test_extract_writes_stream() {
        let dir = tempfile::tempdir().unwrap();
        // -dumpvideo -dumpfile <stream> <input>
        let mplayer = script(dir.path(), "mplayer", r#"cp "$4" "$3""#);
        let input = dir.path().join("clip.avi");
        std::fs::write(&input, b"frames").unwrap();
        let stream = dir.path().join("clip.h264");

        extract_video_stream(&mplayer, &input, &stream).unwrap();
        assert_eq!(std::fs::read(&stream).unwrap(), b"frames");
    }

    #[test]
    fn test_extract_failure_carries_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let mplayer = script(dir.path(), "mplayer", "echo 'no video stream' >&2; exit 1");
        let input = dir.path().join("clip.avi");
        std::fs::write(&input, b"frames").unwrap();

        let err = extract_video_stream(&mplayer, &input, &dir.path().join("clip.h264"))
            .unwrap_err();
        match err {
            Error::ToolFailed { tool, message } => {
                assert_eq!(tool, "mplayer");
                assert_eq!(message, "no video stream");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_zero_exit_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let mplayer = script(dir.path(), "mplayer", "exit 0");
        let input = dir.path().join("clip.avi");
        std::fs::write(&input, b"frames").unwrap();

        let err = extract_video_stream(&mplayer, &input, &dir.path().join("clip.h264"))
            .unwrap_err();
        assert!(matches!(err, Error::OutputMissing { .. }));
    }

    #[test]
    fn test_extract_missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_video_stream(
            &dir.path().join("no-such-mplayer"),
            &dir.path().join("clip.avi"),
            &dir.path().join("clip.h264"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }
}
