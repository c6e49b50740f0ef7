use super::super::args::{AddArgs, DeleteArgs, RankKeyArgs, SetOfferDateArgs};
use super::helpers::open_manager;
use crate::exit_codes::{NOT_FOUND, SUCCESS};
use ranktrack_core::NewRank;
use std::path::Path;

pub(crate) fn cmd_add(config: &Path, db: &Path, args: AddArgs) -> anyhow::Result<i32> {
    let manager = open_manager(config, db)?;
    let new = NewRank {
        rank: args.rank,
        programme: args.programme,
        year: args.year,
        user_id: args.user,
        offer_date: args.offer_date,
        source: args.source,
        is_private: args.private,
    };
    let stored = manager.add_rank(new)?;
    match stored.offer_date {
        Some(date) => eprintln!(
            "rank added: programme={} year={} rank={} offer_date={}",
            stored.programme, stored.year, stored.rank, date
        ),
        None => eprintln!(
            "rank added: programme={} year={} rank={}",
            stored.programme, stored.year, stored.rank
        ),
    }
    Ok(SUCCESS)
}

pub(crate) fn cmd_show(config: &Path, db: &Path, args: RankKeyArgs) -> anyhow::Result<i32> {
    let manager = open_manager(config, db)?;
    match manager.get_rank_record(&args.programme, args.year, Some(&args.user))? {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(SUCCESS)
        }
        None => {
            eprintln!(
                "no rank recorded: user={} programme={} year={}",
                args.user, args.programme, args.year
            );
            Ok(NOT_FOUND)
        }
    }
}

pub(crate) fn cmd_delete(config: &Path, db: &Path, args: DeleteArgs) -> anyhow::Result<i32> {
    let manager = open_manager(config, db)?;
    let deleted = manager.delete_rank(&args.user, args.programme.as_deref(), args.year)?;
    eprintln!(
        "ranks deleted: user={} year={} count={}",
        args.user, args.year, deleted
    );
    Ok(SUCCESS)
}

pub(crate) fn cmd_set_offer_date(
    config: &Path,
    db: &Path,
    args: SetOfferDateArgs,
) -> anyhow::Result<i32> {
    let manager = open_manager(config, db)?;
    let date = if args.clear { None } else { args.date };
    let key = args.key;
    manager.set_offer_date(&key.user, &key.programme, date, key.year)?;
    match date {
        Some(d) => eprintln!("offer date set: {d}"),
        None => eprintln!("offer date cleared"),
    }
    Ok(SUCCESS)
}
