use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft_store::FormDraftStore;
use crate::errors::{AppError, AppResult};
use crate::models::incident_type::IncidentType;
use crate::storage::sqlite::SqliteStore;
use crate::ui::messages::{confirm, info, success, warning};

/// One invocation = one input event: apply the given field changes, then
/// overwrite the stored draft.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Draft {
        kana,
        name,
        org,
        incident_type,
        area,
        address,
        map_link,
        memo,
        people,
        unknown_people,
        print,
        clear,
        yes,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;

        //
        // Clear is exclusive: confirm, remove, done.
        //
        if *clear {
            if !*yes && !confirm("Clear the draft? Everything entered so far is lost.") {
                info("Operation cancelled.");
                return Ok(());
            }
            FormDraftStore::clear(&mut store)?;
            success("Draft cleared.");
            return Ok(());
        }

        let mut draft = FormDraftStore::load(&store)?;
        let mut mutated = false;

        if let Some(v) = kana {
            draft.katakana_name = v.clone();
            mutated = true;
        }
        if let Some(v) = name {
            draft.kanji_name = v.clone();
            mutated = true;
        }
        if let Some(v) = org {
            draft.organization = v.clone();
            mutated = true;
        }
        if let Some(v) = incident_type {
            if IncidentType::from_store_str(v).is_none() {
                return Err(AppError::InvalidIncidentType(format!(
                    "'{}'. Valid types: {}",
                    v,
                    IncidentType::variants().join(", ")
                )));
            }
            draft.incident_type = v.clone();
            mutated = true;
        }
        if let Some(v) = area {
            draft.area = v.clone();
            mutated = true;
        }
        if let Some(v) = address {
            draft.address = v.clone();
            mutated = true;
        }
        if let Some(v) = map_link {
            draft.map_link = v.clone();
            mutated = true;
        }
        if let Some(v) = memo {
            draft.memo = v.clone();
            mutated = true;
        }
        if let Some(v) = people {
            if !v.is_empty() && v.parse::<u32>().is_err() {
                return Err(AppError::InvalidPeopleCount(v.clone()));
            }
            draft.set_people_count(v);
            mutated = true;
        }
        if *unknown_people {
            draft.set_unknown_people(true);
            mutated = true;
        }

        if mutated {
            FormDraftStore::save(&mut store, &draft)?;
            success("Draft saved.");
        }

        if *print || !mutated {
            print_draft(&draft);
        }
    }
    Ok(())
}

fn print_draft(draft: &crate::models::draft::Draft) {
    println!("Current draft:");
    println!("  kana:           {}", draft.katakana_name);
    println!("  name:           {}", draft.kanji_name);
    println!("  organization:   {}", draft.organization);
    println!("  incident type:  {}", draft.incident_type);
    println!("  area:           {}", draft.area);
    println!("  address:        {}", draft.address);
    println!("  map link:       {}", draft.map_link);
    println!("  memo:           {}", draft.memo);
    println!("  people count:   {}", draft.people_count);
    println!("  unknown people: {}", draft.unknown_people);
    println!();

    let unmet = draft.unmet_requirements();
    if unmet.is_empty() {
        success("Ready to submit.");
    } else {
        for reason in unmet {
            warning(reason);
        }
    }
}
