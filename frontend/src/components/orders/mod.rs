//! Order entry form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, requests and
//! helpers.
//!
//! On first render the salespeople and article lists are requested as two
//! independent tasks; each reports back with its own message, and the view
//! decides from both load slots what to show.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod requests;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrderFormProps;
pub use state::OrderFormComponent;

impl Component for OrderFormComponent {
    type Message = Msg;
    type Properties = OrderFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        OrderFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.catalog.begin();

            let link = ctx.link().clone();
            let url = ctx.props().salespeople_url.to_string();
            spawn_local(async move {
                let result = requests::fetch_salespeople(&url).await;
                link.send_message(Msg::SalespeopleLoaded(result));
            });

            let link = ctx.link().clone();
            let url = ctx.props().articles_url.to_string();
            spawn_local(async move {
                let result = requests::fetch_articles(&url).await;
                link.send_message(Msg::ArticlesLoaded(result));
            });
        }
    }
}
