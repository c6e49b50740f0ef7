use super::super::args::UserSub;
use super::helpers::open_store;
use crate::exit_codes::SUCCESS;
use ranktrack_core::validate::require_user_id;
use std::path::Path;

pub(crate) fn run(db: &Path, cmd: UserSub) -> anyhow::Result<i32> {
    let store = open_store(db)?;
    match cmd {
        UserSub::SetName { user, name } => {
            let user = require_user_id(Some(user.as_str()))?;
            store.set_username(user, &name)?;
            eprintln!("display name set: user={user}");
        }
    }
    Ok(SUCCESS)
}
