use super::super::args::*;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Add(args) => super::rank::cmd_add(&cli.config, &cli.db, args),
        Command::Show(args) => super::rank::cmd_show(&cli.config, &cli.db, args),
        Command::Delete(args) => super::rank::cmd_delete(&cli.config, &cli.db, args),
        Command::SetOfferDate(args) => super::rank::cmd_set_offer_date(&cli.config, &cli.db, args),
        Command::Top(args) => super::top::run(&cli.config, &cli.db, args),
        Command::Privacy(args) => super::privacy::run(&cli.config, &cli.db, args.cmd),
        Command::User(args) => super::user::run(&cli.db, args.cmd),
        Command::Programmes => super::programmes::run(&cli.config),
    }
}
