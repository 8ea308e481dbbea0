//! Bohr Model - Electron Transitions and Photons
//!
//! An electron circles the nucleus on one of several shells. Drag it to
//! another shell: moving outward absorbs a photon, moving inward emits one.
//! Photons are colored by wavelength.
//!
//! Controls:
//! - Drag electron: Move it to another shell
//! - Space: Pause/resume
//! - R: Reset

use bohr_atom::equations_ui::{
    draw_equations_sidebar, scene_width, to_color32, BOHR_EQUATIONS, BOHR_VARIABLES,
};
use bohr_atom::renderer::{CircleBatch, Renderer};
use bohr_atom::{constants::ELECTRON_VOLT, Atom, AtomConfig, PointerEvent};
use common::{GraphicsContext, ScreenCamera};
use glam::Vec2;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

const MAX_CIRCLES: usize = 4096;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    camera: ScreenCamera,
    atom: Atom,
    batch: CircleBatch,
    /// Pointer events received since the last frame
    pending: Vec<PointerEvent>,
    cursor: Vec2,
    paused: bool,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let renderer = Renderer::new(&ctx, MAX_CIRCLES);
        let camera = ScreenCamera::new(ctx.width(), ctx.height());
        // The atom is centred in the area left of the sidebar
        let atom_width = scene_width(ctx.width(), ctx.window.scale_factor() as f32);
        let atom = Atom::new(AtomConfig::default(), atom_width, ctx.height());

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            camera,
            atom,
            batch: CircleBatch::new(),
            pending: Vec::new(),
            cursor: Vec2::ZERO,
            paused: false,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.resize(self.ctx.width(), self.ctx.height());
        let atom_width = scene_width(self.ctx.width(), self.ctx.window.scale_factor() as f32);
        self.atom.resize(atom_width, self.ctx.height());
    }

    fn update(&mut self, dt: f32) {
        // Input is applied between frames, never in the middle of a tick
        for event in self.pending.drain(..) {
            self.atom.handle(event);
        }

        if !self.paused {
            self.atom.tick(dt);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.batch.clear();
        self.atom.render(&mut self.batch);

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        let num_circles = self.renderer.update_circles(&self.ctx.queue, &self.batch);

        // Build egui UI
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let atom = &self.atom;
        let paused = self.paused;
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_equations_sidebar(ctx, "Bohr Model", BOHR_EQUATIONS, BOHR_VARIABLES);

            egui::TopBottomPanel::top("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Orbit: n={}", atom.electron().orbit_index + 1));
                    ui.separator();
                    ui.label(format!("E = {:.2} eV", atom.electron_energy() / ELECTRON_VOLT));
                    ui.separator();
                    match atom.last_transition() {
                        Some(transition) => {
                            let color = bohr_atom::spectrum::wavelength_to_color(transition.wavelength_nm);
                            ui.label(
                                egui::RichText::new(format!(
                                    "Last: n={} → n={}  λ = {:.1} nm ({})",
                                    transition.from + 1,
                                    transition.to + 1,
                                    transition.magnitude_nm(),
                                    transition.kind().label()
                                ))
                                .color(to_color32(color)),
                            );
                        }
                        None => {
                            ui.label("Drag the electron to another shell");
                        }
                    }
                    ui.separator();
                    ui.label(format!("Photons: {}", atom.photons().active_count()));
                    if paused {
                        ui.label(egui::RichText::new("PAUSED").color(egui::Color32::YELLOW));
                    }
                });
            });
        });

        self.egui.state.handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self.egui.ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui.renderer.update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, num_circles);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui.renderer.render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Space => self.paused = !self.paused,
            KeyCode::KeyR => self.atom.reset(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, state: ElementState) {
        let event = match state {
            ElementState::Pressed => PointerEvent::Pressed(self.cursor),
            ElementState::Released => PointerEvent::Released(self.cursor),
        };
        self.pending.push(event);
    }

    fn handle_cursor(&mut self, x: f64, y: f64) {
        self.cursor = Vec2::new(x as f32, y as f32);
        // The press may still be queued, so moves are queued regardless
        self.pending.push(PointerEvent::Moved(self.cursor));
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}

fn main() {
    println!("Bohr Model - Electron Transitions");
    println!();
    println!("Controls:");
    println!("  Drag electron - Move it to another shell");
    println!("  Space         - Pause/Resume");
    println!("  R             - Reset");
    println!();

    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Bohr Model - Electron Transitions",
        1280,
        720,
    ));

    let mut app = App::new(ctx);
    let mut last_time = std::time::Instant::now();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.resize(*size),
                        // Always track the cursor so a drag ending over the UI still releases
                        WindowEvent::CursorMoved { position, .. } => {
                            app.handle_cursor(position.x, position.y);
                        }
                        WindowEvent::MouseInput {
                            state,
                            button: MouseButton::Left,
                            ..
                        } if !consumed || *state == ElementState::Released => {
                            app.handle_mouse(*state);
                        }
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key),
                                    state,
                                    ..
                                },
                            ..
                        } if !consumed => app.handle_key(*key, *state),
                        WindowEvent::RedrawRequested => {
                            let now = std::time::Instant::now();
                            let dt = (now - last_time).as_secs_f32().min(0.1);
                            last_time = now;

                            app.update(dt);
                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                Err(e) => log::error!("Render error: {:?}", e),
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
