// src/room/graph.rs
use crate::grid::{Coord, Grid};
use crate::region::Region;
use crate::room::Room;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;
use serde::Serialize;

/// Комнаты карты и симметричное отношение «соединены»
///
/// Индекс узла графа совпадает с индексом комнаты в `rooms`.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    graph: UnGraph<usize, ()>,
}

impl RoomGraph {
    /// Строит по комнате на каждую область, сохраняя их порядок
    #[must_use]
    pub fn from_regions(regions: Vec<Region>, grid: &Grid) -> Self {
        let mut graph = UnGraph::new_undirected();
        let rooms: Vec<Room> = regions
            .into_iter()
            .map(|region| Room::new(region, grid))
            .collect();
        for idx in 0..rooms.len() {
            graph.add_node(idx);
        }
        Self { rooms, graph }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn room(&self, idx: usize) -> &Room {
        &self.rooms[idx]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[must_use]
    pub fn are_connected(&self, a: usize, b: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(a), NodeIndex::new(b))
            .is_some()
    }

    #[must_use]
    pub fn connection_count(&self, idx: usize) -> usize {
        self.graph.neighbors(NodeIndex::new(idx)).count()
    }

    /// Индексы соединённых с комнатой комнат по возрастанию
    #[must_use]
    pub fn connections(&self, idx: usize) -> Vec<usize> {
        let mut neighbours: Vec<usize> = self
            .graph
            .neighbors(NodeIndex::new(idx))
            .map(NodeIndex::index)
            .collect();
        neighbours.sort_unstable();
        neighbours
    }

    /// Все связи парами `(меньший, больший)` в порядке создания
    #[must_use]
    pub fn connection_pairs(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_indices()
            .filter_map(|edge| self.graph.edge_endpoints(edge))
            .map(|(a, b)| (a.index().min(b.index()), a.index().max(b.index())))
            .collect()
    }

    /// Назначает главную комнату: она и всё, что с ней связано, становятся достижимыми
    pub fn set_main_room(&mut self, idx: usize) {
        self.rooms[idx].is_main_room = true;
        self.mark_accessible_from(idx);
    }

    /// Соединяет две комнаты. Повторное соединение ничего не меняет.
    ///
    /// Если одна из комнат достижима из главной, достижимость
    /// распространяется на всё, что теперь с ней связано.
    pub fn connect(&mut self, a: usize, b: usize) {
        if a == b || self.are_connected(a, b) {
            return;
        }
        self.graph.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());

        if self.rooms[a].accessible_from_main_room {
            self.mark_accessible_from(a);
        } else if self.rooms[b].accessible_from_main_room {
            self.mark_accessible_from(b);
        }
    }

    fn mark_accessible_from(&mut self, idx: usize) {
        let mut bfs = Bfs::new(&self.graph, NodeIndex::new(idx));
        while let Some(node) = bfs.next(&self.graph) {
            self.rooms[node.index()].accessible_from_main_room = true;
        }
    }

    #[must_use]
    pub fn all_accessible(&self) -> bool {
        self.rooms.iter().all(|room| room.accessible_from_main_room)
    }

    /// Связна ли вся пещера: из любой комнаты можно дойти до любой другой
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        self.rooms.len() < 2 || connected_components(&self.graph) == 1
    }

    /// Сводка для внешней визуализации
    #[must_use]
    pub fn report(&self) -> Vec<RoomSummary> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(idx, room)| RoomSummary {
                id: idx,
                size: room.size(),
                edge_tiles: room.edge_tiles.len(),
                centroid: room.centroid,
                is_main_room: room.is_main_room,
                accessible_from_main_room: room.accessible_from_main_room,
                connections: self.connections(idx),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub id: usize,
    pub size: usize,
    pub edge_tiles: usize,
    pub centroid: Coord,
    pub is_main_room: bool,
    pub accessible_from_main_room: bool,
    pub connections: Vec<usize>,
}
