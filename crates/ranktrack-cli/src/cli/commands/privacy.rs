use super::super::args::PrivacySub;
use super::helpers::open_manager;
use crate::exit_codes::SUCCESS;
use serde_json::json;
use std::path::Path;

pub(crate) fn run(config: &Path, db: &Path, cmd: PrivacySub) -> anyhow::Result<i32> {
    let manager = open_manager(config, db)?;

    match cmd {
        PrivacySub::Get {
            user,
            year,
            programme: Some(programme),
        } => {
            let is_private = manager.get_is_private_programme(&user, &programme, year)?;
            let out = json!({
                "user_id": user,
                "programme": programme,
                "year": year,
                "is_private": is_private,
            });
            println!("{out}");
        }
        PrivacySub::Get {
            user,
            year,
            programme: None,
        } => {
            let is_private = manager.get_is_private(&user, year)?;
            let only_one_rank = manager.get_has_only_one_rank(&user, year)?;
            let out = json!({
                "user_id": user,
                "year": year,
                "is_private": is_private,
                "only_one_rank": only_one_rank,
            });
            println!("{out}");
        }
        PrivacySub::Set {
            user,
            year,
            programme,
            private,
        } => {
            match programme.as_deref() {
                Some(p) => manager.set_is_private_programme(&user, private, p, year)?,
                None => manager.set_is_private(&user, private, year)?,
            }
            eprintln!(
                "privacy updated: user={} year={} programme={} private={}",
                user,
                year,
                programme.as_deref().unwrap_or("*"),
                private
            );
        }
    }
    Ok(SUCCESS)
}
