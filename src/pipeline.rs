use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};

use crate::{
    cli::ConvertCmd,
    config::Config,
    convert::{TrailingBlockPolicy, assemble_cues},
    formats,
};

pub fn run_convert(cmd: ConvertCmd, cfg: &Config) -> Result<()> {
    let span = tracing::info_span!("convert", input = cmd.input.as_str());
    let _g = span.enter();

    let raw = read_input_to_string(&cmd.input)?;
    tracing::info!(bytes = raw.len(), "read input");

    let doc = formats::json3::parse_json3(&raw)
        .with_context(|| format!("failed parsing caption track: {}", cmd.input))?;

    let offset_ms = cmd.offset_ms.unwrap_or(cfg.policy.offset_ms);
    let trailing = if cfg.policy.flush_trailing_block {
        TrailingBlockPolicy::Flush
    } else {
        TrailingBlockPolicy::Drop
    };
    tracing::info!(offset_ms, ?trailing, "converting");

    let Some(cues) = assemble_cues(&doc, offset_ms, trailing) else {
        tracing::warn!("no captions found; nothing to write");
        return Ok(());
    };

    log_cue_summary(&cues, cfg);

    let rendered = formats::srt::render_cues(&cues);

    if cmd.stdout {
        print!("{rendered}");
        tracing::info!(mode = "stdout", "wrote output");
        return Ok(());
    }

    let out_path = derive_output_path(&cmd)?;
    write_output(&out_path, &rendered, cmd.overwrite)?;
    tracing::info!(path = out_path.as_str(), "wrote output file");

    Ok(())
}

fn read_input_to_string(input: &str) -> Result<String> {
    if input == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn log_cue_summary(cues: &[crate::model::SrtCue], cfg: &Config) {
    tracing::info!(cues = cues.len(), "cue summary");

    if tracing::enabled!(tracing::Level::DEBUG) {
        let n = cfg.logging.debug_cue_samples.min(cues.len());
        for (i, c) in cues.iter().take(n).enumerate() {
            tracing::debug!(
                idx = i,
                start = c.start.as_str(),
                end = c.end.as_str(),
                chars = c.text.chars().count(),
                "cue sample"
            );
        }
    }
}

fn derive_output_path(cmd: &ConvertCmd) -> Result<String> {
    if let Some(o) = &cmd.output {
        return Ok(o.clone());
    }

    if cmd.input == "-" {
        return Err(anyhow!(
            "output path required when input is stdin and --stdout is not set"
        ));
    }

    let p = Path::new(&cmd.input);
    let stem = p
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("bad input filename"))?;

    let parent = p.parent().unwrap_or_else(|| Path::new("."));
    let out = parent.join(format!("{stem}.srt"));
    Ok(out.to_string_lossy().to_string())
}

fn write_output(path: &str, data: &str, overwrite: bool) -> Result<()> {
    if Path::new(path).exists() && !overwrite {
        return Err(anyhow!(
            "refusing to overwrite existing file (pass --overwrite): {path}"
        ));
    }
    fs::write(path, data)?;
    Ok(())
}
