use busline_core::wizard::WizardStep;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StepDotsProps {
    pub current: WizardStep,
    /// Fired with the chosen step; only steps at or before the current one
    /// are clickable.
    #[prop_or_default]
    pub on_select: Callback<WizardStep>,
}

#[function_component(StepDots)]
pub fn step_dots(props: &StepDotsProps) -> Html {
    html! {
        <ol class="bl-steps" aria-label="Booking progress">
            { for WizardStep::ALL.iter().map(|&step| {
                let reachable = step.index() <= props.current.index();
                let class = if step == props.current {
                    classes!("bl-step", "bl-step-current")
                } else if reachable {
                    classes!("bl-step", "bl-step-done")
                } else {
                    classes!("bl-step")
                };
                let onclick = reachable.then(|| {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(step))
                });
                html!{
                    <li class={class} title={step.title()} {onclick}>
                        <span class="bl-step-dot" aria-hidden="true"></span>
                        <span class="bl-step-title">{ step.title() }</span>
                    </li>
                }
            }) }
        </ol>
    }
}
