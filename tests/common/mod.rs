//! Loopback stand-in for a game server answering A2S queries.

use std::io::{Cursor, Write};
use std::net::{SocketAddr, UdpSocket};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use streamer_friendly::Endpoint;

const SINGLE_PACKET: i32 = -1;
pub const PLAYER_REQUEST: u8 = 0x55;
const CHALLENGE: i32 = 0x0BAD_F00D;

pub enum Reply {
    // Answer player queries (challenge first) with these names.
    Players(Vec<&'static str>),

    // Answer every request with an unknown response type.
    Garbage,
}

pub struct FakeServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<u8>>>,
}

impl FakeServer {
    pub fn spawn(reply: Reply) -> FakeServer {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        socket
            .set_read_timeout(Some(Duration::from_secs(10)))
            .unwrap();
        let addr = socket.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        thread::spawn(move || serve(socket, reply, seen));

        FakeServer { addr, requests }
    }

    /// Request type bytes received so far, in arrival order.
    pub fn requests(&self) -> Vec<u8> {
        self.requests.lock().unwrap().clone()
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.addr.ip().to_string(), self.addr.port())
    }
}

fn serve(socket: UdpSocket, reply: Reply, seen: Arc<Mutex<Vec<u8>>>) {
    let mut buf = [0u8; 1400];

    // Exits once the client stops talking and the read times out.
    while let Ok((read, peer)) = socket.recv_from(&mut buf) {
        let request = &buf[..read];
        if let Some(&kind) = request.get(4) {
            seen.lock().unwrap().push(kind);
        }

        let response = match (&reply, request.get(4)) {
            (Reply::Players(names), Some(&PLAYER_REQUEST)) => {
                if challenge_of(request) == CHALLENGE {
                    players_packet(names)
                } else {
                    challenge_packet()
                }
            }
            _ => garbage_packet(),
        };

        if socket.send_to(&response, peer).is_err() {
            break;
        }
    }
}

fn challenge_of(request: &[u8]) -> i32 {
    let mut cursor = Cursor::new(request);
    cursor.set_position(5);
    cursor.read_i32::<LittleEndian>().unwrap_or(-1)
}

fn header(kind: u8) -> Cursor<Vec<u8>> {
    let mut packet = Cursor::new(Vec::with_capacity(64));
    packet.write_i32::<LittleEndian>(SINGLE_PACKET).unwrap();
    packet.write_u8(kind).unwrap();
    packet
}

fn challenge_packet() -> Vec<u8> {
    let mut packet = header(b'A');
    packet.write_i32::<LittleEndian>(CHALLENGE).unwrap();
    packet.into_inner()
}

fn players_packet(names: &[&str]) -> Vec<u8> {
    let mut packet = header(b'D');
    packet.write_u8(u8::try_from(names.len()).unwrap()).unwrap();

    for (index, name) in names.iter().enumerate() {
        packet.write_u8(u8::try_from(index).unwrap()).unwrap();
        packet.write_all(name.as_bytes()).unwrap();
        packet.write_u8(0).unwrap();
        packet.write_i32::<LittleEndian>(index as i32 * 10).unwrap();
        packet.write_f32::<LittleEndian>(60.0).unwrap();
    }

    packet.into_inner()
}

fn garbage_packet() -> Vec<u8> {
    header(0x00).into_inner()
}
