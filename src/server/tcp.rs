//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Loop de aceptación genérico. No sabe nada de HTTP: lee un único buffer
//! de tamaño acotado, se lo pasa a un `ConnectionHandler` y escribe de
//! vuelta los bytes que éste retorne. Después cierra la conexión.
//!
//! Si el cliente manda más bytes que `buffer_size`, el excedente se pierde.

use crate::config::Config;
use crate::error::{Result, ServerError};
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::thread;

/// Lógica que convierte los bytes recibidos en los bytes a responder
///
/// Si retorna `Err`, la conexión se cierra sin enviar nada.
pub trait ConnectionHandler: Send + Sync {
    fn handle(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Handler que devuelve exactamente lo que recibió
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

impl ConnectionHandler for EchoHandler {
    fn handle(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}

impl<F> ConnectionHandler for F
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn handle(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self(data))
    }
}

/// Servidor TCP: una conexión, una lectura, una respuesta
pub struct TcpServer<H> {
    listener: TcpListener,
    handler: Arc<H>,
    buffer_size: usize,
    threaded: bool,
}

impl<H: ConnectionHandler + 'static> TcpServer<H> {
    /// Crea el socket de escucha según la configuración
    ///
    /// El socket tiene `SO_REUSEADDR` activado y escucha con el backlog
    /// configurado.
    pub fn bind(config: &Config, handler: H) -> Result<Self> {
        config.validate()?;

        let listener = bind_listener(&config.address(), config.backlog)?;
        info!("[+] Servidor escuchando en {}", listener.local_addr()?);

        Ok(Self {
            listener,
            handler: Arc::new(handler),
            buffer_size: config.buffer_size,
            threaded: config.threaded,
        })
    }

    /// Dirección real del socket (útil con puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Acepta conexiones para siempre
    ///
    /// Los errores de una conexión se loguean y no detienen el loop.
    pub fn run(&self) -> Result<()> {
        if self.threaded {
            info!("[*] Modo concurrente: un thread por conexión");
        } else {
            info!("[*] Modo secuencial: una conexión a la vez");
        }

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.dispatch(stream),
                Err(e) => {
                    error!("Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Acepta y procesa una sola conexión
    pub fn serve_one(&self) -> Result<()> {
        let (stream, _) = self.listener.accept()?;
        handle_connection(stream, self.handler.as_ref(), self.buffer_size)
    }

    fn dispatch(&self, stream: TcpStream) {
        if self.threaded {
            let handler = Arc::clone(&self.handler);
            let buffer_size = self.buffer_size;

            thread::spawn(move || {
                serve_logged(stream, handler.as_ref(), buffer_size);
            });
        } else {
            serve_logged(stream, self.handler.as_ref(), self.buffer_size);
        }
    }
}

/// Crea un listener con `SO_REUSEADDR` y el backlog indicado
pub fn bind_listener(address: &str, backlog: i32) -> Result<TcpListener> {
    let addr = address
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| ServerError::InvalidConfig(format!("Cannot resolve {}", address)))?;

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    Ok(socket.into())
}

/// Procesa una conexión y loguea el resultado
fn serve_logged<H: ConnectionHandler + ?Sized>(stream: TcpStream, handler: &H, buffer_size: usize) {
    let peer_addr = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    debug!("Nueva conexión desde: {}", peer_addr);

    match handle_connection(stream, handler, buffer_size) {
        Ok(()) => {}
        Err(ServerError::Parse(e)) => {
            warn!("Request malformado de {}, se cierra sin responder: {}", peer_addr, e);
        }
        Err(e) => {
            error!("Error en conexión con {}: {}", peer_addr, e);
        }
    }
}

/// Lee una vez, delega al handler, escribe la respuesta y cierra
pub fn handle_connection<H: ConnectionHandler + ?Sized>(
    mut stream: TcpStream,
    handler: &H,
    buffer_size: usize,
) -> Result<()> {
    let mut buffer = vec![0u8; buffer_size];
    let bytes_read = stream.read(&mut buffer)?;

    if bytes_read == 0 {
        debug!("Conexión cerrada sin datos");
        return Ok(());
    }

    debug!("{} bytes leídos", bytes_read);

    let response = handler.handle(&buffer[..bytes_read])?;

    stream.write_all(&response)?;
    stream.flush()?;

    // El stream se cierra al salir de scope
    Ok(())
}
