use common::error::{LoadError, SubmitError};
use common::loader::ArticleBatch;
use common::model::salesperson::Salesperson;
use common::selection::SelectionAction;

pub enum Msg {
    SalespeopleLoaded(Result<Vec<Salesperson>, LoadError>),
    ArticlesLoaded(Result<ArticleBatch, LoadError>),
    Select(SelectionAction),
    Submit,
    SubmitFinished(Result<(), SubmitError>),
}
