use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use drill_core::model::{DrillSettings, QuestionBank};
use drill_core::time::fixed_clock;
use services::{AssistService, Clock, DrillEvent};

use crate::context::{UiApp, build_app_context};
use crate::views::{DrillView, QuestionsView, use_drill_provider};
use crate::vm::{DrillIntent, DrillVm};

#[derive(Clone)]
struct TestApp {
    bank: Arc<QuestionBank>,
    assistant: Arc<AssistService>,
    settings: DrillSettings,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn assistant(&self) -> Arc<AssistService> {
        Arc::clone(&self.assistant)
    }

    fn drill_settings(&self) -> DrillSettings {
        self.settings
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Drill,
    Questions,
}

#[derive(Clone, Default)]
struct HarnessHandles {
    vm: Rc<RefCell<Option<Signal<DrillVm>>>>,
    view: Rc<RefCell<Option<Signal<ViewKind>>>>,
}

impl HarnessHandles {
    fn register(&self, vm: Signal<DrillVm>, view: Signal<ViewKind>) {
        *self.vm.borrow_mut() = Some(vm);
        *self.view.borrow_mut() = Some(view);
    }

    fn vm(&self) -> Signal<DrillVm> {
        (*self.vm.borrow()).expect("drill vm registered")
    }

    fn view(&self) -> Signal<ViewKind> {
        (*self.view.borrow()).expect("view registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: HarnessHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Mirrors the app layout: the drill lives above the routed page.
#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let vm = use_drill_provider();
    let view = use_signal(|| props.view);
    use_context_provider(|| view);
    use_hook(|| props.handles.register(vm, view));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<Signal<ViewKind>>();
    match view() {
        ViewKind::Drill => rsx! { DrillView {} },
        ViewKind::Questions => rsx! { QuestionsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn current_index(&self) -> usize {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().session().current_index())
    }

    pub fn dispatch(&mut self, intent: DrillIntent) {
        let mut vm = self.handles.vm();
        self.dom.in_runtime(|| vm.write().dispatch(intent));
        drive_dom(&mut self.dom);
    }

    /// Feed countdown ticks straight to the drill, as the event pump would.
    pub fn tick(&mut self, count: u32) {
        let mut vm = self.handles.vm();
        self.dom.in_runtime(|| {
            let epoch = vm.read().session().epoch();
            for _ in 0..count {
                vm.write().apply(DrillEvent::Tick { epoch });
            }
        });
        drive_dom(&mut self.dom);
    }

    pub fn show(&mut self, kind: ViewKind) {
        let mut view = self.handles.view();
        self.dom.in_runtime(|| view.set(kind));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, settings: DrillSettings) -> ViewHarness {
    let app = Arc::new(TestApp {
        bank: Arc::new(QuestionBank::builtin()),
        assistant: Arc::new(AssistService::disabled()),
        settings,
    });
    let handles = HarnessHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
