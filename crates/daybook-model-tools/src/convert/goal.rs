use crate::convert::{FromDbModel, FromModel, IntoDbModel};
use daybook_entity::goal::{ActiveModel, GoalType as GoalTypeModel, Model as GoalModel};
use daybook_model::goal::{Goal, GoalChanges, GoalType};
use sea_orm::ActiveValue;

impl FromDbModel<GoalTypeModel> for GoalType {
    fn from_db_model(model: GoalTypeModel) -> Self {
        match model {
            GoalTypeModel::LongTerm => Self::LongTerm,
            GoalTypeModel::ShortTerm => Self::ShortTerm,
        }
    }
}

impl FromModel<GoalType> for GoalTypeModel {
    fn from_model(model: GoalType) -> Self {
        match model {
            GoalType::LongTerm => Self::LongTerm,
            GoalType::ShortTerm => Self::ShortTerm,
        }
    }
}

impl FromDbModel<GoalModel> for Goal {
    fn from_db_model(model: GoalModel) -> Self {
        Self {
            id: model.id,
            user: model.user_id,
            title: model.title,
            kind: FromDbModel::from_db_model(model.kind),
            created_at: model.created_at,
        }
    }
}

/// Only the changed fields are set, everything else stays `NotSet`.
impl FromModel<GoalChanges> for ActiveModel {
    fn from_model(changes: GoalChanges) -> Self {
        let mut active = Self::default();
        if let Some(title) = changes.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(kind) = changes.kind {
            active.kind = ActiveValue::Set(kind.into_db_model());
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::IntoModel;
    use sea_orm::ActiveModelTrait;

    #[test]
    fn test_goal_from_db_model() {
        let created_at = chrono::Utc::now().fixed_offset();
        let goal: Goal = GoalModel {
            id: 4,
            user_id: 2,
            title: "Learn Rust".to_owned(),
            kind: GoalTypeModel::ShortTerm,
            created_at,
        }
        .into_model();
        assert_eq!(goal.user, 2);
        assert_eq!(goal.kind, GoalType::ShortTerm);
        assert_eq!(goal.created_at, created_at);
    }

    #[test]
    fn test_changes_into_active_model() {
        let active: ActiveModel = GoalChanges::default().into_db_model();
        assert!(!active.is_changed());

        let active: ActiveModel = GoalChanges {
            title: None,
            kind: Some(GoalType::LongTerm),
        }
        .into_db_model();
        assert_eq!(active.kind, ActiveValue::Set(GoalTypeModel::LongTerm));
        assert!(active.title.is_not_set());
    }
}
