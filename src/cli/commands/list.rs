use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::AwsProfile;
use crate::store::ProfileBackend;
use std::io::Write;

pub fn execute(backend: &dyn ProfileBackend, format: OutputFormat) -> Result<()> {
    let profiles = backend.list()?;
    let mut stdout = std::io::stdout();
    write_profiles(&mut stdout, &profiles, format)
}

fn write_profiles(out: &mut dyn Write, profiles: &[AwsProfile], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(profiles)?)?;
        }
        OutputFormat::Text => {
            if profiles.is_empty() {
                writeln!(out, "No EC2 profiles stored")?;
                return Ok(());
            }

            writeln!(out, "EC2 profiles:\n")?;
            for profile in profiles {
                writeln!(
                    out,
                    "  {} [{}] key={} secret={} region={}",
                    profile.name,
                    profile.status().as_str(),
                    profile.access_key_id,
                    profile.masked_secret(),
                    profile.region_name,
                )?;
            }
        }
    }
    Ok(())
}
