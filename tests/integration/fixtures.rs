//! Shared fixtures: a realistic kanban board in the shape the parser expects.

/// Board with three entries across phases, one nested checklist, one entry
/// with no metadata at all.
pub const KANBAN_BOARD: &str = r#"# Project Kanban

## 📋 Backlog

1. **[TASK] Fix desktop app file path loading**

   Fix the file path issues in the main process and validate desktop mode.

   - [ ] Fix app startup and loading
   - [ ] Test window creation and sizing

   Labels: `task, component-desktop`
   priority-critical, phase-1

2. **[FEATURE] Character data API integration**

   Integrate character API endpoints to display character information.

   1. Implement character API calls
   2. Add character data caching

   Labels: `feature, component-api`
   priority-high, phase-2

3. **[Bug] Fix login crash**

Some plain description without labels or markers.
"#;
