use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::cli::context::{CommandError, ShellContext};
use crate::cli::output::{self, Alignment, Table};
use crate::core::services::{AmountPolicy, ReportService, TransactionDraft, TransactionService};
use crate::labels::{Labeled, Language};
use crate::ledger::{Category, ReportPeriod, TransactionKind};
use crate::reports;

pub(crate) type CommandHandler = fn(&mut ShellContext, &[&str]) -> Result<(), CommandError>;

pub(crate) struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: CommandHandler,
}

pub(crate) static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "add <income|expense> <category> <amount> [YYYY-MM-DD] [description...]",
        summary: "Record a transaction (date defaults to today)",
        handler: cmd_add,
    },
    CommandSpec {
        name: "list",
        usage: "list",
        summary: "Show transaction history, newest first",
        handler: cmd_list,
    },
    CommandSpec {
        name: "dashboard",
        usage: "dashboard",
        summary: "Show headline business metrics",
        handler: cmd_dashboard,
    },
    CommandSpec {
        name: "statement",
        usage: "statement [this-month|last-month|last-3-months|this-year|all]",
        summary: "Show the income statement for a period",
        handler: cmd_statement,
    },
    CommandSpec {
        name: "breakdown",
        usage: "breakdown <income|expense>",
        summary: "Sum amounts per category",
        handler: cmd_breakdown,
    },
    CommandSpec {
        name: "cashflow",
        usage: "cashflow",
        summary: "Show the running cash balance by date",
        handler: cmd_cashflow,
    },
    CommandSpec {
        name: "daily",
        usage: "daily",
        summary: "Show income, expenses, and net flow per day",
        handler: cmd_daily,
    },
    CommandSpec {
        name: "progress",
        usage: "progress",
        summary: "Show formalization progress and level",
        handler: cmd_progress,
    },
    CommandSpec {
        name: "achievements",
        usage: "achievements",
        summary: "List unlocked achievements",
        handler: cmd_achievements,
    },
    CommandSpec {
        name: "categories",
        usage: "categories",
        summary: "List the categories a transaction can use",
        handler: cmd_categories,
    },
    CommandSpec {
        name: "json",
        usage: "json <dashboard|statement|cashflow|achievements|transactions>",
        summary: "Print a report as JSON",
        handler: cmd_json,
    },
    CommandSpec {
        name: "lang",
        usage: "lang [en|es]",
        summary: "Show or change the label language",
        handler: cmd_lang,
    },
    CommandSpec {
        name: "policy",
        usage: "policy [strict|allow_zero]",
        summary: "Show or change which amounts are accepted",
        handler: cmd_policy,
    },
    CommandSpec {
        name: "version",
        usage: "version",
        summary: "Show build information",
        handler: cmd_version,
    },
    CommandSpec {
        name: "help",
        usage: "help [command]",
        summary: "List commands or show usage for one",
        handler: cmd_help,
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell (the session ledger is discarded)",
        handler: cmd_exit,
    },
];

pub(crate) fn find(name: &str) -> Option<&'static CommandSpec> {
    let name = match name {
        "quit" => "exit",
        "history" => "list",
        other => other,
    };
    COMMANDS.iter().find(|spec| spec.name == name)
}

fn usage_error(name: &str) -> CommandError {
    let usage = find(name).map(|spec| spec.usage).unwrap_or(name);
    CommandError::InvalidArguments(format!("Usage: {usage}"))
}

fn parse_arg<T>(raw: &str) -> Result<T, CommandError>
where
    T: FromStr,
    CommandError: From<T::Err>,
{
    Ok(raw.parse::<T>()?)
}

/// Picks the wording for the session language.
fn text(ctx: &ShellContext, english: &'static str, spanish: &'static str) -> &'static str {
    match ctx.language() {
        Language::English => english,
        Language::Spanish => spanish,
    }
}

/// `YYYY-MM-DD` shape, whether or not the date exists.
fn looks_like_date(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

fn cmd_add(ctx: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [kind, category, amount, rest @ ..] = args else {
        return Err(usage_error("add"));
    };
    let kind: TransactionKind = parse_arg(kind)?;
    let category: Category = parse_arg(category)?;
    let amount = Decimal::from_str(amount.trim_start_matches('$')).map_err(|_| {
        CommandError::InvalidArguments(format!("`{amount}` is not a valid amount"))
    })?;

    let (date, description) = match rest.split_first() {
        Some((first, tail)) => match NaiveDate::parse_from_str(first, "%Y-%m-%d") {
            Ok(date) => (date, tail.join(" ")),
            Err(_) if looks_like_date(first) => {
                return Err(CommandError::InvalidArguments(format!(
                    "`{first}` is not a valid date"
                )));
            }
            Err(_) => (ctx.today, rest.join(" ")),
        },
        None => (ctx.today, String::new()),
    };

    let draft = TransactionDraft::new(date, kind, category, amount).with_description(description);
    TransactionService::record(&mut ctx.ledger, draft, ctx.config.amount_policy)?;
    output::success(text(
        ctx,
        "Transaction added successfully!",
        "¡Transacción agregada exitosamente!",
    ));
    Ok(())
}

fn cmd_list(ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    output::section(text(ctx, "Transaction History", "Historial de Transacciones"));
    if ctx.ledger.is_empty() {
        output::info(text(
            ctx,
            "No transactions recorded yet. Start by adding your first transaction!",
            "Aún no hay transacciones. ¡Comience agregando su primera transacción!",
        ));
        return Ok(());
    }
    let lang = ctx.language();
    let mut table = Table::new([
        (text(ctx, "Date", "Fecha"), Alignment::Left),
        (text(ctx, "Type", "Tipo"), Alignment::Left),
        (text(ctx, "Category", "Categoría"), Alignment::Left),
        (text(ctx, "Amount", "Monto"), Alignment::Right),
        (text(ctx, "Description", "Descripción"), Alignment::Left),
    ]);
    for txn in TransactionService::history(&ctx.ledger) {
        table.push(vec![
            ctx.date(txn.date()),
            txn.kind().label(lang).to_string(),
            txn.category().label(lang).to_string(),
            ctx.money(txn.amount()),
            txn.description().unwrap_or_default().to_string(),
        ]);
    }
    output::line(table.render());
    Ok(())
}

fn cmd_dashboard(ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    let dashboard = ReportService::dashboard(&ctx.ledger, ctx.today);
    let level_title = reports::level(dashboard.level)
        .map_or(dashboard.level_title, |level| level.label(ctx.language()));
    output::section(text(ctx, "My Business", "Mi Negocio"));
    let mut table = Table::new([
        (text(ctx, "Metric", "Indicador"), Alignment::Left),
        (text(ctx, "Value", "Valor"), Alignment::Right),
    ]);
    table.push(vec![
        text(ctx, "Cash Position", "Posición de Efectivo").into(),
        ctx.money(dashboard.cash_position),
    ]);
    table.push(vec![
        text(ctx, "Total Income", "Ingresos Totales").into(),
        ctx.money(dashboard.total_income),
    ]);
    table.push(vec![
        text(ctx, "Total Expenses", "Gastos Totales").into(),
        ctx.money(dashboard.total_expenses),
    ]);
    table.push(vec![
        text(ctx, "Today's Transactions", "Transacciones de Hoy").into(),
        dashboard.transactions_today.to_string(),
    ]);
    table.push(vec![
        text(ctx, "Formalization Level", "Nivel de Formalización").into(),
        format!("{} {} - {level_title}", text(ctx, "Level", "Nivel"), dashboard.level),
    ]);
    table.push(vec![
        text(ctx, "Achievements", "Logros").into(),
        dashboard.achievement_count.to_string(),
    ]);
    output::line(table.render());
    Ok(())
}

fn cmd_statement(ctx: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let period = match args {
        [] => ReportPeriod::AllTime,
        parts => parse_arg(&parts.join(" "))?,
    };
    let report = ReportService::statement_for(&ctx.ledger, period, ctx.today);
    let title = text(ctx, "Income Statement", "Estado de Resultados");
    let heading = match report.window {
        Some(window) => format!("{title} ({period}: {window})"),
        None => format!("{title} ({period})"),
    };
    output::section(heading);

    let amount_header = text(ctx, "Amount", "Monto");
    let mut table = Table::new([
        (text(ctx, "Item", "Concepto"), Alignment::Left),
        (amount_header, Alignment::Right),
    ]);
    table.push(vec![
        text(ctx, "Total Income", "Ingresos Totales").into(),
        ctx.money(report.statement.total_income),
    ]);
    table.push(vec![
        text(ctx, "Total Expenses", "Gastos Totales").into(),
        ctx.money(report.statement.total_expenses),
    ]);
    table.push(vec![
        text(ctx, "Net Income", "Utilidad Neta").into(),
        ctx.money(report.statement.net_income),
    ]);
    output::line(table.render());

    let lang = ctx.language();
    for (kind, groups) in [
        (TransactionKind::Income, &report.income_by_category),
        (TransactionKind::Expense, &report.expenses_by_category),
    ] {
        if groups.is_empty() {
            continue;
        }
        output::line("");
        let mut detail = Table::new([(kind.label(lang), Alignment::Left), (amount_header, Alignment::Right)]);
        for (category, amount) in groups {
            detail.push(vec![category.label(lang).to_string(), ctx.money(*amount)]);
        }
        output::line(detail.render());
    }
    Ok(())
}

fn cmd_breakdown(ctx: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [kind] = args else {
        return Err(usage_error("breakdown"));
    };
    let kind: TransactionKind = parse_arg(kind)?;
    let lang = ctx.language();
    let groups = reports::category_breakdown(&ctx.ledger, kind);
    output::section(format!(
        "{} {}",
        kind.label(lang),
        text(ctx, "by Category", "por Categoría")
    ));
    if groups.is_empty() {
        output::info(text(ctx, "No matching transactions.", "No hay transacciones de este tipo."));
        return Ok(());
    }
    let mut table = Table::new([
        (text(ctx, "Category", "Categoría"), Alignment::Left),
        (text(ctx, "Amount", "Monto"), Alignment::Right),
    ]);
    for (category, amount) in groups {
        table.push(vec![category.label(lang).to_string(), ctx.money(amount)]);
    }
    output::line(table.render());
    Ok(())
}

fn cmd_cashflow(ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    output::section(text(ctx, "Cash Flow", "Flujo de Caja"));
    output::line(format!(
        "{}: {}",
        text(ctx, "Available Cash", "Efectivo Disponible"),
        ctx.money(reports::cash_position(&ctx.ledger))
    ));
    let series = reports::cash_flow_series(&ctx.ledger);
    if series.is_empty() {
        output::info(text(
            ctx,
            "No data available for cash flow statement. Add some transactions first!",
            "No hay datos para el flujo de caja. ¡Agregue algunas transacciones primero!",
        ));
        return Ok(());
    }
    let mut table = Table::new([
        (text(ctx, "Date", "Fecha"), Alignment::Left),
        (text(ctx, "Running Balance", "Saldo Acumulado"), Alignment::Right),
    ]);
    for point in series {
        table.push(vec![ctx.date(point.date), ctx.money(point.running_balance)]);
    }
    output::line(table.render());
    Ok(())
}

fn cmd_daily(ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    output::section(text(ctx, "Daily Cash Flow", "Flujo de Caja Diario"));
    let totals = reports::daily_kind_totals(&ctx.ledger);
    if totals.is_empty() {
        output::info(text(ctx, "No transactions recorded yet.", "Aún no hay transacciones."));
        return Ok(());
    }
    let mut table = Table::new([
        (text(ctx, "Date", "Fecha"), Alignment::Left),
        (text(ctx, "Income", "Ingresos"), Alignment::Right),
        (text(ctx, "Expenses", "Gastos"), Alignment::Right),
        (text(ctx, "Net", "Neto"), Alignment::Right),
    ]);
    for (day, (_, net)) in totals.iter().zip(reports::daily_net_flow(&ctx.ledger)) {
        table.push(vec![
            ctx.date(day.date),
            ctx.money(day.income),
            ctx.money(day.expenses),
            ctx.money(net),
        ]);
    }
    output::line(table.render());
    Ok(())
}

fn cmd_progress(ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    let lang = ctx.language();
    let ratio = reports::progress_ratio(&ctx.ledger);
    let level = reports::formalization_level(&ctx.ledger);
    output::section(text(ctx, "Formalization Progress", "Progreso de Formalización"));
    output::line(format!(
        "{}: {}",
        text(ctx, "Progress", "Progreso"),
        crate::currency::format_percent(ratio)
    ));
    output::line(format!(
        "{}: {} ({}/{})",
        text(ctx, "Current Level", "Nivel Actual"),
        level.label(lang),
        level.number,
        reports::MAX_LEVEL
    ));
    output::line(text(ctx, "Level Requirements:", "Requisitos del Nivel:"));
    for requirement in level.requirement_labels(lang) {
        output::line(format!("  - {requirement}"));
    }
    if let Some(next) = reports::next_level(level) {
        output::info(format!(
            "{}: {}",
            text(
                ctx,
                "Complete current requirements to unlock",
                "Complete los requisitos actuales para desbloquear"
            ),
            next.label(lang)
        ));
    }
    Ok(())
}

fn cmd_achievements(ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    output::section(text(ctx, "Achievements", "Logros"));
    let unlocked = reports::achievements(&ctx.ledger);
    if unlocked.is_empty() {
        output::info(text(
            ctx,
            "No achievements yet. Record a transaction to earn your first one.",
            "Aún no hay logros. Registre una transacción para obtener el primero.",
        ));
        return Ok(());
    }
    let lang = ctx.language();
    for id in unlocked {
        output::success(id.label(lang));
    }
    Ok(())
}

fn cmd_categories(ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    let lang = ctx.language();
    let mut table = Table::new([
        (text(ctx, "Key", "Clave"), Alignment::Left),
        (text(ctx, "Label", "Nombre"), Alignment::Left),
        (text(ctx, "Usual Type", "Tipo Habitual"), Alignment::Left),
    ]);
    for category in Category::ALL {
        table.push(vec![
            category.identifier().to_string(),
            category.label(lang).to_string(),
            category.suggested_kind().label(lang).to_string(),
        ]);
    }
    output::line(table.render());
    Ok(())
}

fn cmd_json(ctx: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    let [what] = args else {
        return Err(usage_error("json"));
    };
    let json = match what.to_ascii_lowercase().as_str() {
        "dashboard" => serde_json::to_string_pretty(&ReportService::dashboard(&ctx.ledger, ctx.today))?,
        "statement" => serde_json::to_string_pretty(&ReportService::statement_for(
            &ctx.ledger,
            ReportPeriod::AllTime,
            ctx.today,
        ))?,
        "cashflow" => serde_json::to_string_pretty(&reports::cash_flow_series(&ctx.ledger))?,
        "achievements" => serde_json::to_string_pretty(&reports::achievements(&ctx.ledger))?,
        "transactions" => serde_json::to_string_pretty(ctx.ledger.all())?,
        _ => return Err(usage_error("json")),
    };
    output::line(json);
    Ok(())
}

fn cmd_lang(ctx: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    match args {
        [] => {
            output::info(format!("Language: {}", ctx.language()));
            Ok(())
        }
        [raw] => {
            let language: Language = parse_arg(raw)?;
            let tag = match language {
                Language::English => "en-US",
                Language::Spanish => "es-PA",
            };
            ctx.update_config(|config| config.locale = tag.to_string())?;
            output::success(format!("Language set to {language}"));
            Ok(())
        }
        _ => Err(usage_error("lang")),
    }
}

fn cmd_policy(ctx: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    match args {
        [] => {
            output::info(format!("Amount policy: {}", ctx.config.amount_policy));
            Ok(())
        }
        [raw] => {
            let policy: AmountPolicy = parse_arg(raw)?;
            ctx.update_config(|config| config.amount_policy = policy)?;
            output::success(format!("Amount policy set to {policy}"));
            Ok(())
        }
        _ => Err(usage_error("policy")),
    }
}

fn cmd_version(_ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    output::line(format!(
        "finpath {} ({} {}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("FINPATH_BUILD_HASH"),
        env!("FINPATH_BUILD_STATUS"),
        env!("FINPATH_BUILD_TIMESTAMP"),
    ));
    output::line(format!(
        "target {} [{}], {}",
        env!("FINPATH_BUILD_TARGET"),
        env!("FINPATH_BUILD_PROFILE"),
        env!("FINPATH_BUILD_RUSTC"),
    ));
    Ok(())
}

fn cmd_help(_ctx: &mut ShellContext, args: &[&str]) -> Result<(), CommandError> {
    match args {
        [] => {
            output::section("Commands");
            let mut table = Table::new([("Command", Alignment::Left), ("Description", Alignment::Left)]);
            for spec in COMMANDS {
                table.push(vec![spec.name.to_string(), spec.summary.to_string()]);
            }
            output::line(table.render());
            Ok(())
        }
        [name] => match find(&name.to_lowercase()) {
            Some(spec) => {
                output::line(format!("Usage: {}", spec.usage));
                output::line(spec.summary);
                Ok(())
            }
            None => Err(CommandError::InvalidArguments(format!(
                "No help available for `{name}`"
            ))),
        },
        _ => Err(usage_error("help")),
    }
}

fn cmd_exit(_ctx: &mut ShellContext, _args: &[&str]) -> Result<(), CommandError> {
    Err(CommandError::ExitRequested)
}
