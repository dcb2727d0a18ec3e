use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::DrillVm;

/// Start the drill and share it below this scope.
///
/// Call this above the router outlet: the drill and its countdown must
/// outlive route changes, so the drill page only borrows it.
pub fn use_drill_provider() -> Signal<DrillVm> {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| DrillVm::new(ctx.start_drill()));
    use_context_provider(|| vm);

    // Ticks and assistant replies arrive on the controller's channel.
    use_future(move || async move {
        let Some(mut events) = vm.write().take_events() else {
            return;
        };
        while let Some(event) = events.recv().await {
            vm.write().apply(event);
        }
    });

    vm
}
